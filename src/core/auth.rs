use crate::db::accounts::{account_exists, insert_account, load_account};
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::account::AccountContext;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rusqlite::Connection;

/// Credential store: sign-up, login and account resolution.
pub struct AccountLogic;

impl AccountLogic {
    /// Create a new account. Fails without touching the existing row when the
    /// id is already taken.
    pub fn sign_up(
        conn: &Connection,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> AppResult<AccountContext> {
        let email = normalize_email(email);

        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "email and password are required".into(),
            ));
        }
        if password != confirm {
            return Err(AppError::Validation("passwords don't match".into()));
        }
        if account_exists(conn, &email)? {
            return Err(AppError::DuplicateAccount(email));
        }

        let hash = hash_password(password)?;
        insert_account(conn, &email, &hash)?;

        ttlog(conn, "signup", &email, "Account created")?;

        Ok(AccountContext::new(email))
    }

    /// Check a password and hand back the account context on success.
    /// Unknown account and wrong password produce the same error.
    pub fn login(conn: &Connection, email: &str, password: &str) -> AppResult<AccountContext> {
        let email = normalize_email(email);

        let account = load_account(conn, &email)?.ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &account.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        ttlog(conn, "login", &email, "Login successful")?;

        Ok(AccountContext::new(account.id))
    }

    /// Build a context for an account id that must already exist.
    pub fn resolve(conn: &Connection, email: &str) -> AppResult<AccountContext> {
        let email = normalize_email(email);
        if !account_exists(conn, &email)? {
            return Err(AppError::UnknownAccount(email));
        }
        Ok(AccountContext::new(email))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Argon2id with a random per-account salt, encoded as a PHC string.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(hash)
}

pub fn verify_password(password: &str, phc: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(phc).map_err(|e| AppError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
