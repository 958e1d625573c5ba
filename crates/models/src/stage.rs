use strum::{Display, EnumIter, IntoEnumIterator};

/// One level of the catalog hierarchy, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Years,
    Terms,
    Departments,
    CourseNumbers,
    Sections,
    CourseOutlines,
}

impl Stage {
    pub fn all() -> Vec<Stage> {
        Stage::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Years.to_string(), "years");
        assert_eq!(Stage::CourseNumbers.to_string(), "course_numbers");
        assert_eq!(Stage::CourseOutlines.to_string(), "course_outlines");
    }

    #[test]
    fn test_stage_order() {
        // Traversal must respect hierarchy depth
        let all = Stage::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all.first(), Some(&Stage::Years));
        assert_eq!(all.last(), Some(&Stage::CourseOutlines));
    }
}
