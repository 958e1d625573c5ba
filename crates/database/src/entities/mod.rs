pub mod course_number;
pub mod course_outline;
pub mod department;
pub mod outline_grade;
pub mod outline_instructor;
pub mod outline_schedule;
pub mod outline_text;
pub mod section;
pub mod term;
pub mod year;
