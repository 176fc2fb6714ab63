use super::must_var;
use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Resolve the connection URL for `profile` from `DATABASE_URL`.
pub fn database_url(profile: DbProfile) -> Result<String, AppError> {
    let url = must_var("DATABASE_URL")?;
    check_profile(profile, &url)?;
    Ok(url)
}

fn check_profile(profile: DbProfile, url: &str) -> Result<(), AppError> {
    if profile != DbProfile::Test || url.starts_with("sqlite:") {
        return Ok(());
    }

    // Enforce safety: test DB must end with "_test"
    let db_name = url
        .rsplit('/')
        .next()
        .and_then(|tail| tail.split('?').next())
        .unwrap_or_default();
    if !db_name.ends_with("_test") {
        return Err(AppError::config(format!(
            "Test profile requires database name to end with '_test', but got: '{db_name}'"
        )));
    }
    Ok(())
}
