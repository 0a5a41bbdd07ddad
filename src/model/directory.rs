use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::model::{
    phone::Phone,
    seed,
    user::{Admin, AdminCredentials, Voter},
};

/// Everyone who can log in: voters keyed by phone, the election officer, and
/// the phone logins still waiting for an OTP.
pub struct Directory {
    voters: RwLock<HashMap<Phone, Voter>>,
    officer: Officer,
    pending: RwLock<HashMap<u64, DateTime<Utc>>>,
}

/// The election officer account. Only the password hash is kept.
struct Officer {
    admin: Admin,
    password_hash: String,
}

impl Directory {
    /// Build a directory, hashing the officer's password.
    pub fn new(voters: Vec<Voter>, admin: Admin, password: &str) -> Result<Self, argon2::Error> {
        // 16 bytes is recommended for password hashing:
        //  https://en.wikipedia.org/wiki/Argon2
        let mut salt = [0_u8; 16];
        rand::thread_rng().fill(&mut salt);
        let password_hash =
            argon2::hash_encoded(password.as_bytes(), &salt, &argon2::Config::default())?;

        Ok(Self {
            voters: RwLock::new(
                voters
                    .into_iter()
                    .map(|voter| (voter.phone.clone(), voter))
                    .collect(),
            ),
            officer: Officer {
                admin,
                password_hash,
            },
            pending: RwLock::new(HashMap::new()),
        })
    }

    /// The demo directory: two registered voters and the `admin` officer.
    pub fn seeded() -> Result<Self, argon2::Error> {
        Self::new(seed::voters(), seed::admin(), seed::ADMIN_PASSWORD)
    }

    /// Remember a pending login until `expire_at`, forgetting any that have lapsed.
    pub fn begin_login(&self, nonce: u64, expire_at: DateTime<Utc>) {
        let now = Utc::now();
        let mut pending = self.pending.write().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|_, expiry| *expiry > now);
        pending.insert(nonce, expire_at);
    }

    /// Consume a pending login. Succeeds at most once per nonce, and only
    /// before it expires.
    pub fn finish_login(&self, nonce: u64) -> bool {
        let mut pending = self.pending.write().unwrap_or_else(PoisonError::into_inner);
        matches!(pending.remove(&nonce), Some(expiry) if expiry > Utc::now())
    }

    /// The voter registered with `phone`, registering a new demo voter if there is none.
    pub fn voter_for_phone(&self, phone: &Phone) -> Voter {
        let mut voters = self.voters.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(voter) = voters.get(phone) {
            return voter.clone();
        }

        // Fresh voters are numbered by the current time in milliseconds.
        let mut id = Utc::now().timestamp_millis();
        while voters.values().any(|voter| voter.id == id.to_string()) {
            id += 1;
        }
        let voter = Voter::new(
            id.to_string(),
            phone.clone(),
            seed::DEMO_VOTER_NAME,
            seed::DEMO_CONSTITUENCY,
        );
        voters.insert(phone.clone(), voter.clone());
        voter
    }

    /// Apply `change` to the registered copy of `voter` and return the result.
    ///
    /// The change lands on what the directory already holds, not on the
    /// caller's copy, so a stale session cannot roll back documents or a vote.
    pub fn amend(&self, voter: &Voter, change: impl FnOnce(&mut Voter)) -> Voter {
        let mut voters = self.voters.write().unwrap_or_else(PoisonError::into_inner);
        let stored = voters
            .entry(voter.phone.clone())
            .or_insert_with(|| voter.clone());
        change(stored);
        stored.clone()
    }

    /// Check officer credentials, yielding the officer on success.
    pub fn authenticate_admin(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<Option<Admin>, argon2::Error> {
        if credentials.username != self.officer.admin.username {
            return Ok(None);
        }
        let verified = argon2::verify_encoded(
            &self.officer.password_hash,
            credentials.password.as_bytes(),
        )?;
        Ok(verified.then(|| self.officer.admin.clone()))
    }
}
