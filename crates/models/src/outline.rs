use serde::Deserialize;

/// The full course-outline payload returned for a five-segment path
/// (`year/term/department/course/section`).
///
/// The endpoint answers with a single object rather than an array: a primary
/// `info` payload plus nested collections for instructors, schedule entries,
/// grading components and required texts. All collections may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineData {
    #[serde(default)]
    pub info: Option<OutlineInfo>,
    #[serde(default)]
    pub instructors: Vec<OutlineInstructor>,
    #[serde(default)]
    pub course_schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    pub grades: Vec<GradeComponent>,
    #[serde(default)]
    pub required_texts: Vec<RequiredText>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prerequisites: Option<String>,
    #[serde(default)]
    pub corequisites: Option<String>,
    #[serde(default)]
    pub delivery_method: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineInstructor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(default)]
    pub section_code: Option<String>,
    #[serde(default)]
    pub days: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub campus: Option<String>,
    #[serde(default)]
    pub is_exam: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GradeComponent {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequiredText {
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_outline() {
        let json = r#"{
            "info": {
                "title": "Social Issues and Communication Technology",
                "units": "3",
                "deliveryMethod": "In Person",
                "designation": "Breadth-Social Sci",
                "prerequisites": ""
            },
            "instructors": [
                { "name": "Jane Doe", "email": "jdoe@example.edu", "roleCode": "PI" }
            ],
            "courseSchedule": [
                {
                    "sectionCode": "LEC",
                    "days": "Mo, We, Fr",
                    "startTime": "10:30",
                    "endTime": "11:20",
                    "campus": "Burnaby"
                }
            ],
            "grades": [
                { "description": "Final exam", "weight": "40" }
            ],
            "requiredTexts": [
                { "details": "Course reader, available at the bookstore" }
            ]
        }"#;

        let outline: OutlineData = serde_json::from_str(json).unwrap();
        let info = outline.info.unwrap();
        assert_eq!(info.units.as_deref(), Some("3"));
        assert_eq!(info.delivery_method.as_deref(), Some("In Person"));
        assert_eq!(info.description, None);
        assert_eq!(outline.instructors.len(), 1);
        assert_eq!(outline.course_schedule[0].days.as_deref(), Some("Mo, We, Fr"));
        assert_eq!(outline.grades[0].weight.as_deref(), Some("40"));
        assert_eq!(outline.required_texts.len(), 1);
    }

    #[test]
    fn test_sparse_outline() {
        // Some sections publish an outline with no nested collections at all
        let outline: OutlineData = serde_json::from_str(r#"{ "info": { "title": "Directed Studies" } }"#).unwrap();
        assert!(outline.instructors.is_empty());
        assert!(outline.course_schedule.is_empty());
        assert!(outline.grades.is_empty());
        assert!(outline.required_texts.is_empty());
    }
}
