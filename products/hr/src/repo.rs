//! Persistence gateway for employee records.

use async_trait::async_trait;
use entity::employees;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Schema,
};
use tracing::{debug, instrument};

use crate::model::{Employee, EmployeeFields, EmployeeId};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new record; storage assigns the id.
    async fn insert(&self, fields: EmployeeFields) -> anyhow::Result<Employee>;

    /// Writes every mutable field of an existing record.
    async fn save(&self, employee: Employee) -> anyhow::Result<Employee>;

    async fn find_by_id(&self, id: EmployeeId) -> anyhow::Result<Option<Employee>>;

    /// All records in ascending id order.
    async fn find_all(&self) -> anyhow::Result<Vec<Employee>>;

    async fn find_by_department(&self, department: &str) -> anyhow::Result<Vec<Employee>>;

    async fn delete(&self, employee: &Employee) -> anyhow::Result<()>;
}

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the `employees` table and its indexes when they are absent.
    pub async fn ensure_table(db: &DatabaseConnection) -> anyhow::Result<()> {
        let backend = db.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(employees::Entity);
        table.if_not_exists();
        db.execute(backend.build(&table)).await?;

        for mut index in schema.create_index_from_entity(employees::Entity) {
            index.if_not_exists();
            db.execute(backend.build(&index)).await?;
        }
        debug!("employees table ready");
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    #[instrument(name = "hr.repo.insert", skip_all)]
    async fn insert(&self, fields: EmployeeFields) -> anyhow::Result<Employee> {
        let model = employees::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(fields.name),
            email: ActiveValue::Set(fields.email),
            department: ActiveValue::Set(fields.department),
            salary: ActiveValue::Set(fields.salary),
        }
        .insert(&self.db)
        .await?;
        Ok(model.into())
    }

    #[instrument(name = "hr.repo.save", skip_all, fields(id = employee.id))]
    async fn save(&self, employee: Employee) -> anyhow::Result<Employee> {
        let model = employees::ActiveModel {
            id: ActiveValue::Unchanged(employee.id),
            name: ActiveValue::Set(employee.name),
            email: ActiveValue::Set(employee.email),
            department: ActiveValue::Set(employee.department),
            salary: ActiveValue::Set(employee.salary),
        }
        .update(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: EmployeeId) -> anyhow::Result<Option<Employee>> {
        let found = employees::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Employee>> {
        let rows = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_department(&self, department: &str) -> anyhow::Result<Vec<Employee>> {
        let rows = employees::Entity::find()
            .filter(employees::Column::Department.eq(department))
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(name = "hr.repo.delete", skip_all, fields(id = employee.id))]
    async fn delete(&self, employee: &Employee) -> anyhow::Result<()> {
        employees::Entity::delete_by_id(employee.id)
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
