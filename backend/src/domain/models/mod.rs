pub mod grade;
pub mod student;
