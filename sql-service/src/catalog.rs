//! 示例查询目录
//!
//! 健康检查端点返回的静态教学目录：带标题与分类的示例查询，以及已知
//! 表名。目录是纯配置数据，按请求拷贝进健康结果，核心逻辑不依赖它。

use common::models::{NamedQuery, QueryCategory};

/// Known table names in the teaching schema.
pub fn table_names() -> Vec<String> {
    vec!["favorites".to_string(), "students".to_string()]
}

/// The labeled sample queries shown to learners.
pub fn sample_queries() -> Vec<NamedQuery> {
    vec![
        // SELECT queries
        named("Find All", "SELECT * FROM students;", QueryCategory::Select),
        named(
            "Find By Name",
            "SELECT username, first_name, last_name FROM students WHERE first_name = 'Nanny';",
            QueryCategory::Select,
        ),
        named(
            "Find Like Name",
            "SELECT username, first_name, last_name, email FROM students\n\
             WHERE first_name LIKE 'Nan%';",
            QueryCategory::Select,
        ),
        named(
            "Find Distinct Values",
            "SELECT DISTINCT is_good FROM students;",
            QueryCategory::Select,
        ),
        named(
            "Order By Name Ascending",
            "SELECT first_name, last_name, email FROM students\n\
             ORDER BY last_name ASC\n\
             LIMIT 15;",
            QueryCategory::Select,
        ),
        named(
            "Order By Multiple Columns",
            "SELECT first_name, last_name, shirt_size FROM students\n\
             WHERE shirt_size IS NOT NULL\n\
             ORDER BY shirt_size ASC, last_name DESC\n\
             LIMIT 20;",
            QueryCategory::Select,
        ),
        named(
            "Find With AND Condition",
            "SELECT first_name, last_name, gender, is_good FROM students\n\
             WHERE gender = 'Female' AND is_good = 'Daily'\n\
             LIMIT 10;",
            QueryCategory::Select,
        ),
        named(
            "Find With OR Condition",
            "SELECT first_name, last_name, shirt_size FROM students\n\
             WHERE shirt_size = 'XS' OR shirt_size = 'XL'\n\
             ORDER BY shirt_size, last_name\n\
             LIMIT 15;",
            QueryCategory::Select,
        ),
        named(
            "Find With IN Clause",
            "SELECT first_name, last_name, is_good FROM students\n\
             WHERE is_good IN ('Daily', 'Weekly', 'Monthly')\n\
             ORDER BY is_good, last_name\n\
             LIMIT 20;",
            QueryCategory::Select,
        ),
        named(
            "Find NULL Values",
            "SELECT username, first_name, last_name, email FROM students\n\
             WHERE email IS NULL\n\
             LIMIT 10;",
            QueryCategory::Select,
        ),
        named(
            "Count All",
            "SELECT COUNT(*) AS total_students FROM students;",
            QueryCategory::Select,
        ),
        named(
            "Count By Group",
            "SELECT is_good, COUNT(*) AS good_students\n\
             FROM students\n\
             GROUP BY is_good\n\
             ORDER BY good_students DESC;",
            QueryCategory::Select,
        ),
        named(
            "Count Grouped With HAVING",
            "SELECT shirt_size, COUNT(*) AS student_count\n\
             FROM students\n\
             WHERE shirt_size IS NOT NULL\n\
             GROUP BY shirt_size\n\
             HAVING COUNT(*) > 1\n\
             ORDER BY student_count DESC;",
            QueryCategory::Select,
        ),
        named(
            "Popular Favorite Colors",
            "SELECT f.favorite AS color, COUNT(*) AS student_count\n\
             FROM favorites f\n\
             WHERE f.category = 'COLOR'\n\
             GROUP BY f.favorite\n\
             ORDER BY student_count DESC\n\
             LIMIT 10;",
            QueryCategory::Select,
        ),
        named(
            "Join Favorites Filter Name",
            "SELECT s.id, s.first_name, f.category, f.favorite\n\
             FROM students s\n\
             JOIN favorites f ON s.id = f.student_id\n\
             WHERE s.first_name = 'Thor';",
            QueryCategory::Select,
        ),
        named(
            "Join Favorites Filter Color w/ Limit",
            "SELECT s.id, s.first_name, f.category, f.favorite\n\
             FROM students s\n\
             JOIN favorites f ON s.id = f.student_id\n\
             WHERE f.category = 'COLOR'\n\
             AND f.favorite = 'Fuscia'\n\
             ORDER BY s.first_name\n\
             LIMIT 10;",
            QueryCategory::Select,
        ),
        named(
            "Students Without Favorites",
            "SELECT s.id, s.first_name, s.last_name\n\
             FROM students s\n\
             LEFT JOIN favorites f ON s.id = f.student_id\n\
             WHERE f.student_id IS NULL\n\
             LIMIT 10;",
            QueryCategory::Select,
        ),
        // INSERT/UPDATE/DELETE queries
        named(
            "Insert New Student",
            "INSERT INTO students (id, username, first_name, last_name, email, gender)\n\
             VALUES ('new-student-id-123', 'jdoe123', 'John', 'Doe', 'jdoe@example.com', 'Male');",
            QueryCategory::Mutation,
        ),
        named(
            "Insert Multiple Students",
            "INSERT INTO students (id, username, first_name, last_name, email, gender)\n\
             VALUES\n\
               ('student-id-001', 'asmith', 'Alice', 'Smith', 'asmith@example.com', 'Female'),\n\
               ('student-id-002', 'bjones', 'Bob', 'Jones', 'bjones@example.com', 'Male');",
            QueryCategory::Mutation,
        ),
        named(
            "Update By Name",
            "UPDATE students SET first_name = 'NotNanny'\n\
             WHERE first_name = 'Nanny';",
            QueryCategory::Mutation,
        ),
        named(
            "Delete Record(s)",
            "DELETE FROM students WHERE first_name = 'Nanny';",
            QueryCategory::Mutation,
        ),
        named(
            "Delete With Subquery (FK Safe)",
            "DELETE FROM favorites\n\
             WHERE student_id IN (\n\
               SELECT id FROM students WHERE first_name = 'Nanny'\n\
             );",
            QueryCategory::Mutation,
        ),
        // Table operations (DDL)
        named(
            "Create New Table",
            "CREATE TABLE projects (\n\
               id VARCHAR(40) PRIMARY KEY,\n\
               student_id VARCHAR(40),\n\
               project_name VARCHAR(100),\n\
               grade VARCHAR(10),\n\
               completed_date DATE,\n\
               FOREIGN KEY (student_id) REFERENCES students(id)\n\
             );",
            QueryCategory::TableOps,
        ),
        named(
            "Drop Table",
            "DROP TABLE IF EXISTS projects;",
            QueryCategory::TableOps,
        ),
        named(
            "Alter Table Add Column",
            "ALTER TABLE students\n\
             ADD COLUMN grade_level VARCHAR(10);",
            QueryCategory::TableOps,
        ),
        named(
            "Show All Tables",
            "SELECT name FROM sqlite_master\n\
             WHERE type = 'table'\n\
             ORDER BY name;",
            QueryCategory::TableOps,
        ),
        named(
            "Show Table Columns",
            "SELECT name, type, \"notnull\"\n\
             FROM pragma_table_info('students');",
            QueryCategory::TableOps,
        ),
    ]
}

fn named(title: &str, query: &str, category: QueryCategory) -> NamedQuery {
    NamedQuery {
        title: title.to_string(),
        query: query.to_string(),
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_not_empty() {
        let queries = sample_queries();
        assert!(!queries.is_empty());
        assert!(queries.iter().all(|q| !q.title.trim().is_empty()));
        assert!(queries.iter().all(|q| !q.query.trim().is_empty()));
    }

    #[test]
    fn test_every_category_is_represented() {
        let queries = sample_queries();
        for category in [
            QueryCategory::Select,
            QueryCategory::Mutation,
            QueryCategory::TableOps,
        ] {
            assert!(queries.iter().any(|q| q.category == category));
        }
    }

    #[test]
    fn test_table_names_match_schema() {
        assert_eq!(table_names(), vec!["favorites", "students"]);
    }
}
