use clap::Parser;
use error_stack::{Result, ResultExt};

use shelf::models::admin::{self, UpsertAdmin};
use shelf::{config, database};

use super::CliError;

/// Create or update the admin scaffold row.
///
/// This mirrors the `create-admin` maintenance script: the row is kept for
/// a future multi-admin login flow and is not read by the cookie-based
/// authentication path.
#[derive(Debug, Parser)]
pub struct CreateAdminCommand {
    #[clap(long, env = "ADMIN_EMAIL", default_value = "admin@example.com")]
    pub email: String,
    #[clap(long, env = "ADMIN_NAME", default_value = "Admin")]
    pub name: String,
    #[clap(long, env = "ADMIN_PASSWORD", default_value = "admin123")]
    pub password: String,
}

pub fn run(args: CreateAdminCommand) -> Result<(), CliError> {
    let config = config::Server::load().change_context(CliError)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .change_context(CliError)
        .attach_printable("could not build tokio runtime")?
        .block_on(create_admin(&config, args))
}

async fn create_admin(config: &config::Server, args: CreateAdminCommand) -> Result<(), CliError> {
    let pool = database::Pool::new(&config.db)
        .await
        .change_context(CliError)?;

    pool.migrate().await.change_context(CliError)?;

    println!("Creating admin user: {}", args.email);

    let mut conn = pool.get().await.change_context(CliError)?;
    let password_hash = admin::hash_password(&args.email, &args.password);
    let admin = UpsertAdmin {
        email: &args.email,
        name: &args.name,
        password_hash: &password_hash,
    }
    .upsert(&mut conn)
    .await
    .change_context(CliError)?;

    println!("Admin user created/updated successfully!");
    println!("  Email: {}", admin.email);
    println!("  Name: {}", admin.name);
    Ok(())
}
