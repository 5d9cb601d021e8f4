//! Challenge model and load-time challenge set

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::utils::crypto::hash_flag;

/// A challenge, immutable for the duration of a competition run.
///
/// Flags are stored as SHA-256 hex digests only; the plaintext values never
/// survive content loading.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub id: Uuid,
    pub name: String,
    pub points: i64,
    pub category: String,
    flag_hashes: Vec<String>,
}

impl Challenge {
    /// Create a challenge from plaintext flag values, hashing them immediately
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        points: i64,
        category: impl Into<String>,
        flags: &[&str],
    ) -> Self {
        Self {
            id,
            name: name.into(),
            points,
            category: category.into(),
            flag_hashes: flags.iter().map(|f| hash_flag(f)).collect(),
        }
    }

    /// Stored flag digests (any-match)
    pub fn flag_hashes(&self) -> &[String] {
        &self.flag_hashes
    }
}

/// On-disk challenge entry. Accepts either plaintext `flags` (hashed at load)
/// or pre-hashed `flag_hashes`.
#[derive(Debug, Deserialize)]
struct ChallengeEntry {
    id: Uuid,
    name: String,
    points: i64,
    category: String,
    #[serde(default)]
    flags: Vec<String>,
    #[serde(default)]
    flag_hashes: Vec<String>,
}

/// The read-only set of challenges loaded at startup
#[derive(Debug, Clone, Default)]
pub struct ChallengeSet {
    challenges: HashMap<Uuid, Challenge>,
}

impl ChallengeSet {
    /// Build a challenge set from already-constructed challenges
    pub fn from_challenges(challenges: impl IntoIterator<Item = Challenge>) -> Self {
        Self {
            challenges: challenges.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// Load the challenge set from a JSON file
    pub fn load(path: &Path) -> Result<Self, ChallengeLoadError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ChallengeLoadError::Io(path.display().to_string(), e))?;
        Self::from_json(&raw)
    }

    /// Parse a challenge set from a JSON document
    pub fn from_json(raw: &str) -> Result<Self, ChallengeLoadError> {
        let entries: Vec<ChallengeEntry> = serde_json::from_str(raw)?;

        let mut challenges = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.flags.is_empty() && entry.flag_hashes.is_empty() {
                return Err(ChallengeLoadError::NoFlags(entry.name));
            }

            let mut flag_hashes: Vec<String> =
                entry.flags.iter().map(|f| hash_flag(f)).collect();
            flag_hashes.extend(entry.flag_hashes.iter().map(|h| h.to_lowercase()));

            let challenge = Challenge {
                id: entry.id,
                name: entry.name,
                points: entry.points,
                category: entry.category,
                flag_hashes,
            };

            if challenges.insert(challenge.id, challenge).is_some() {
                return Err(ChallengeLoadError::DuplicateId(entry.id));
            }
        }

        Ok(Self { challenges })
    }

    /// Look up a challenge by id
    pub fn get(&self, id: &Uuid) -> Option<&Challenge> {
        self.challenges.get(id)
    }

    /// Iterate over all challenges (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.values()
    }

    /// Number of loaded challenges
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

/// Challenge content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ChallengeLoadError {
    #[error("Failed to read challenge file {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Invalid challenge JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Challenge '{0}' has no flags")]
    NoFlags(String),

    #[error("Duplicate challenge id: {0}")]
    DuplicateId(Uuid),
}
