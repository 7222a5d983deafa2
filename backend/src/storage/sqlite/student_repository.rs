use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::student::{NewStudent, Student};
use crate::storage::sqlite::connection::SqliteTransaction;
use crate::storage::traits::StudentStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn student_from_row(row: &SqliteRow) -> Result<Student> {
    let birthdate: String = row.try_get("birthdate")?;
    let birthdate = NaiveDate::parse_from_str(&birthdate, DATE_FORMAT)
        .with_context(|| format!("Corrupt birthdate in students table: {}", birthdate))?;

    Ok(Student {
        id: row.try_get("id")?,
        firstname: row.try_get("firstname")?,
        lastname: row.try_get("lastname")?,
        birthdate,
    })
}

#[async_trait]
impl StudentStorage for SqliteTransaction {
    async fn store_student(&mut self, student: NewStudent) -> Result<Student> {
        let result = sqlx::query(
            r#"
            INSERT INTO students (firstname, lastname, birthdate)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&student.firstname)
        .bind(&student.lastname)
        .bind(student.birthdate.format(DATE_FORMAT).to_string())
        .execute(&mut *self.tx)
        .await?;

        Ok(student.with_id(result.last_insert_rowid()))
    }

    async fn get_student(&mut self, student_id: i64) -> Result<Option<Student>> {
        let row = sqlx::query(
            r#"
            SELECT id, firstname, lastname, birthdate
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(student_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        row.as_ref().map(student_from_row).transpose()
    }

    async fn update_student(&mut self, student: &Student) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE students
            SET firstname = ?, lastname = ?, birthdate = ?
            WHERE id = ?
            "#,
        )
        .bind(&student.firstname)
        .bind(&student.lastname)
        .bind(student.birthdate.format(DATE_FORMAT).to_string())
        .bind(student.id)
        .execute(&mut *self.tx)
        .await?;
        Ok(())
    }

    async fn delete_student(&mut self, student_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(student_id)
            .execute(&mut *self.tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::DbConnection;
    use crate::storage::traits::{Connection, StorageTransaction};

    async fn setup_test() -> DbConnection {
        DbConnection::init_in_memory().await.expect("Failed to create test database")
    }

    fn new_student(firstname: &str) -> NewStudent {
        NewStudent {
            firstname: firstname.to_string(),
            lastname: "Baggins".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1991, 7, 24).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_store_and_get_student() {
        let db = setup_test().await;
        let mut tx = db.begin().await.unwrap();

        let stored = tx.store_student(new_student("Frodo")).await.expect("Failed to store student");
        let fetched = tx.get_student(stored.id).await.expect("Failed to get student");

        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let db = setup_test().await;
        let mut tx = db.begin().await.unwrap();

        let first = tx.store_student(new_student("Frodo")).await.unwrap();
        let second = tx.store_student(new_student("Bilbo")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_get_nonexistent_student() {
        let db = setup_test().await;
        let mut tx = db.begin().await.unwrap();

        assert!(tx.get_student(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_student_persists_after_commit() {
        let db = setup_test().await;

        let mut tx = db.begin().await.unwrap();
        let mut student = tx.store_student(new_student("Frodo")).await.unwrap();
        tx.commit().await.unwrap();

        student.lastname = "Sacquet".to_string();
        student.birthdate = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();

        let mut tx = db.begin().await.unwrap();
        tx.update_student(&student).await.unwrap();
        tx.commit().await.unwrap();

        let mut tx = db.begin().await.unwrap();
        let fetched = tx.get_student(student.id).await.unwrap().unwrap();
        assert_eq!(fetched.lastname, "Sacquet");
        assert_eq!(fetched.birthdate, NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
    }

    #[tokio::test]
    async fn test_delete_student() {
        let db = setup_test().await;
        let mut tx = db.begin().await.unwrap();

        let student = tx.store_student(new_student("Frodo")).await.unwrap();

        assert!(tx.delete_student(student.id).await.unwrap());
        assert!(tx.get_student(student.id).await.unwrap().is_none());
        assert!(!tx.delete_student(student.id).await.unwrap());
    }
}
