//! backend/src/io/rest/mappers/student_mapper.rs

use chrono::{NaiveTime, SecondsFormat, TimeZone, Utc};
use shared::Student as StudentDto;

use crate::domain::models::student::Student;

/// Mapper from domain Student models to Student DTOs.
pub struct StudentMapper;

impl StudentMapper {
    pub fn to_dto(student: &Student) -> StudentDto {
        StudentDto {
            id: student.id,
            firstname: student.firstname.clone(),
            lastname: student.lastname.clone(),
            birthdate: Self::format_birthdate(student),
        }
    }

    /// Midnight UTC of the birth date, e.g. "1990-01-01T00:00:00+00:00"
    fn format_birthdate(student: &Student) -> String {
        let midnight = student.birthdate.and_time(NaiveTime::MIN);
        Utc.from_utc_datetime(&midnight)
            .to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}
