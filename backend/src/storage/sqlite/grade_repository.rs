use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::grade::{Grade, NewGrade};
use crate::storage::sqlite::connection::SqliteTransaction;
use crate::storage::traits::GradeStorage;

fn grade_from_row(row: &SqliteRow) -> Result<Grade> {
    Ok(Grade {
        id: row.try_get("id")?,
        value: row.try_get("value")?,
        subject: row.try_get("subject")?,
        student_id: row.try_get("student_id")?,
    })
}

#[async_trait]
impl GradeStorage for SqliteTransaction {
    async fn store_grade(&mut self, grade: NewGrade) -> Result<Grade> {
        let result = sqlx::query(
            r#"
            INSERT INTO grades (value, subject, student_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(grade.value)
        .bind(&grade.subject)
        .bind(grade.student_id)
        .execute(&mut *self.tx)
        .await?;

        Ok(grade.with_id(result.last_insert_rowid()))
    }

    async fn list_grades_for_student(&mut self, student_id: i64) -> Result<Vec<Grade>> {
        let rows = sqlx::query(
            r#"
            SELECT id, value, subject, student_id
            FROM grades
            WHERE student_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(&mut *self.tx)
        .await?;

        rows.iter().map(grade_from_row).collect()
    }

    async fn list_grades(&mut self) -> Result<Vec<Grade>> {
        let rows = sqlx::query(
            r#"
            SELECT id, value, subject, student_id
            FROM grades
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await?;

        rows.iter().map(grade_from_row).collect()
    }

    async fn delete_grades_for_student(&mut self, student_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM grades WHERE student_id = ?")
            .bind(student_id)
            .execute(&mut *self.tx)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::student::NewStudent;
    use crate::storage::sqlite::DbConnection;
    use crate::storage::traits::{Connection, StudentStorage};
    use chrono::NaiveDate;

    async fn setup_with_student() -> (DbConnection, SqliteTransaction, i64) {
        let db = DbConnection::init_in_memory().await.expect("Failed to create test database");
        let mut tx = db.begin().await.unwrap();
        let student = tx
            .store_student(NewStudent {
                firstname: "Samsagace".to_string(),
                lastname: "Gamegie".to_string(),
                birthdate: NaiveDate::from_ymd_opt(1992, 6, 20).unwrap(),
            })
            .await
            .unwrap();
        (db, tx, student.id)
    }

    fn new_grade(student_id: i64, value: i64, subject: &str) -> NewGrade {
        NewGrade {
            value,
            subject: subject.to_string(),
            student_id,
        }
    }

    #[tokio::test]
    async fn test_store_and_list_grades() {
        let (_db, mut tx, student_id) = setup_with_student().await;

        let math = tx.store_grade(new_grade(student_id, 18, "math")).await.unwrap();
        let art = tx.store_grade(new_grade(student_id, 9, "art")).await.unwrap();

        let grades = tx.list_grades_for_student(student_id).await.unwrap();
        assert_eq!(grades, vec![math, art]);
        assert_eq!(tx.list_grades().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_grades_are_scoped_to_student() {
        let (_db, mut tx, student_id) = setup_with_student().await;
        tx.store_grade(new_grade(student_id, 12, "sport")).await.unwrap();

        assert!(tx.list_grades_for_student(student_id + 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_grade_requires_existing_student() {
        let (_db, mut tx, student_id) = setup_with_student().await;

        let result = tx.store_grade(new_grade(student_id + 100, 12, "sport")).await;
        assert!(result.is_err(), "foreign key should reject an unknown student");
    }

    #[tokio::test]
    async fn test_value_out_of_range_is_rejected_by_schema() {
        let (_db, mut tx, student_id) = setup_with_student().await;

        assert!(tx.store_grade(new_grade(student_id, 21, "math")).await.is_err());
        assert!(tx.store_grade(new_grade(student_id, -1, "math")).await.is_err());
    }

    #[tokio::test]
    async fn test_deleting_student_cascades_to_grades() {
        let (_db, mut tx, student_id) = setup_with_student().await;
        tx.store_grade(new_grade(student_id, 12, "sport")).await.unwrap();
        tx.store_grade(new_grade(student_id, 14, "english")).await.unwrap();

        tx.delete_student(student_id).await.unwrap();

        assert!(tx.list_grades().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_grades_for_student() {
        let (_db, mut tx, student_id) = setup_with_student().await;
        tx.store_grade(new_grade(student_id, 12, "sport")).await.unwrap();
        tx.store_grade(new_grade(student_id, 14, "english")).await.unwrap();

        assert_eq!(tx.delete_grades_for_student(student_id).await.unwrap(), 2);
        assert!(tx.list_grades_for_student(student_id).await.unwrap().is_empty());
    }
}
