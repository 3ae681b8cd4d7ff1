use clap::Args;
use storefront_app::{
    auth::Role,
    database,
    domain::users::{PgUsersService, UsersService, models::NewUser},
};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Unique login name
    #[arg(long)]
    username: String,

    /// Login password
    #[arg(long, env = "STOREFRONT_USER_PASSWORD", hide_env_values = true)]
    password: String,

    /// Address that receives order notifications
    #[arg(long)]
    email: String,

    /// Either `customer` or `admin`
    #[arg(long, default_value = "admin")]
    role: Role,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let user = PgUsersService::new(pool)
        .register(NewUser {
            username: args.username,
            password: args.password,
            email: args.email,
            role: args.role,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("username: {}", user.username);
    println!("role: {}", user.role);

    Ok(())
}
