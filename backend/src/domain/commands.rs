//! Domain-level command and result types.
//! The REST layer builds these from validated form values; they are never
//! exposed over the API directly.

pub mod students {
    use chrono::NaiveDate;

    /// Input for creating a new student
    #[derive(Debug, Clone)]
    pub struct CreateStudentCommand {
        pub firstname: String,
        pub lastname: String,
        pub birthdate: NaiveDate,
    }

    /// Input for replacing the fields of an existing student
    #[derive(Debug, Clone)]
    pub struct UpdateStudentCommand {
        pub student_id: i64,
        pub firstname: String,
        pub lastname: String,
        pub birthdate: NaiveDate,
    }
}

pub mod grades {
    use crate::domain::models::grade::Grade;
    use crate::domain::models::student::Student;

    /// Input for adding a grade to a student
    #[derive(Debug, Clone)]
    pub struct CreateGradeCommand {
        pub student_id: i64,
        pub value: i64,
        pub subject: String,
    }

    /// A freshly stored grade together with its student
    #[derive(Debug, Clone)]
    pub struct CreateGradeResult {
        pub grade: Grade,
        pub student: Student,
    }

    /// Average of a set of grades
    #[derive(Debug, Clone, PartialEq)]
    pub struct AverageResult {
        pub average: Option<f64>,
        pub grade_count: usize,
    }
}
