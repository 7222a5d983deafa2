//! backend/src/io/rest/mappers/grade_mapper.rs

use shared::{AverageResponse, Grade as GradeDto};

use crate::domain::commands::grades::{AverageResult, CreateGradeResult};
use crate::io::rest::mappers::student_mapper::StudentMapper;

/// Mapper from grade results to Grade and Average DTOs.
pub struct GradeMapper;

impl GradeMapper {
    pub fn to_dto(result: &CreateGradeResult) -> GradeDto {
        GradeDto {
            id: result.grade.id,
            value: result.grade.value,
            subject: result.grade.subject.clone(),
            student: StudentMapper::to_dto(&result.student),
        }
    }

    pub fn to_average_dto(result: &AverageResult) -> AverageResponse {
        AverageResponse {
            average: result.average,
        }
    }
}
