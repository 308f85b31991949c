use crate::configuration::get_configuration;
use actix_web::rt;
use sqlx::PgPool;

/// Applies the embedded migrations to the configured database.
pub struct MigrateCommand;

impl MigrateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MigrateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::console::commands::CallableTrait for MigrateCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        rt::System::new().block_on(async move {
            let settings = get_configuration()?;
            let db_pool = PgPool::connect(&settings.database.connection_string()).await?;

            sqlx::migrate!("./migrations").run(&db_pool).await?;
            println!(
                "Migrations applied to {}@{}",
                settings.database.database_name, settings.database.host
            );

            Ok(())
        })
    }
}
