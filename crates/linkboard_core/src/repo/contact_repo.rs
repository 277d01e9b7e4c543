//! Contact repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Expose contacts and per-contact experiences in insertion order.
//! - Load and validate fixture documents from JSON.
//!
//! # Invariants
//! - Contact ids and experience ids are unique.
//! - Every experience refers to a contact present in the same store.
//! - `end_date >= start_date` when an experience has an end date.
//! - No persona or country label equals the `all` filter value.

use crate::aggregate::SELECTION_ALL;
use crate::model::contact::{Contact, ContactId};
use crate::model::experience::{Experience, ExperienceId};
use chrono::{DateTime, NaiveDate, Utc};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::path::Path;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors raised while building a repository from external data.
#[derive(Debug)]
pub enum RepoError {
    DuplicateContactId(ContactId),
    DuplicateExperienceId(ExperienceId),
    /// Experience points at a contact id that is not in the store.
    DanglingExperience {
        experience_id: ExperienceId,
        contact_id: ContactId,
    },
    InvalidExperienceWindow {
        experience_id: ExperienceId,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Filterable label collides with the `all` selection value.
    ReservedLabel {
        contact_id: ContactId,
        field: &'static str,
    },
    Parse(serde_json::Error),
    Io(std::io::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateContactId(id) => write!(f, "duplicate contact id: {id}"),
            Self::DuplicateExperienceId(id) => write!(f, "duplicate experience id: {id}"),
            Self::DanglingExperience {
                experience_id,
                contact_id,
            } => write!(
                f,
                "experience {experience_id} refers to unknown contact {contact_id}"
            ),
            Self::InvalidExperienceWindow {
                experience_id,
                start,
                end,
            } => write!(
                f,
                "experience {experience_id}: end_date ({end}) must be >= start_date ({start})"
            ),
            Self::ReservedLabel { contact_id, field } => write!(
                f,
                "contact {contact_id}: {field} must not be `{SELECTION_ALL}`"
            ),
            Self::Parse(err) => write!(f, "invalid fixture document: {err}"),
            Self::Io(err) => write!(f, "failed to read fixture: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Serialized fixture layout: `{ "contacts": [...], "experiences": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureDocument {
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

/// Fingerprint of a loaded fixture.
///
/// Two repositories with equal versions are treated as holding the same
/// data, so the value can key memoized view results. `content_hash` covers
/// every field of every record, in order; it is stable within one process
/// only and must not be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FixtureVersion {
    pub contacts: usize,
    pub experiences: usize,
    pub latest_created_at: Option<DateTime<Utc>>,
    pub content_hash: u64,
}

impl FixtureVersion {
    pub fn of(contacts: &[Contact], experiences: &[Experience]) -> Self {
        let mut hasher = DefaultHasher::new();
        contacts.hash(&mut hasher);
        experiences.hash(&mut hasher);
        Self {
            contacts: contacts.len(),
            experiences: experiences.len(),
            latest_created_at: contacts.iter().map(|contact| contact.created_at).max(),
            content_hash: hasher.finish(),
        }
    }
}

/// Read-only access to contact records.
pub trait ContactRepository {
    /// All contacts in insertion order.
    fn list_contacts(&self) -> &[Contact];

    /// Experiences whose `contact_id` equals `contact_id`, in insertion order.
    fn list_experiences(&self, contact_id: ContactId) -> Vec<&Experience>;

    fn fixture_version(&self) -> FixtureVersion;

    fn get_contact(&self, id: ContactId) -> Option<&Contact> {
        self.list_contacts().iter().find(|contact| contact.id == id)
    }
}

impl<R: ContactRepository + ?Sized> ContactRepository for &R {
    fn list_contacts(&self) -> &[Contact] {
        (**self).list_contacts()
    }

    fn list_experiences(&self, contact_id: ContactId) -> Vec<&Experience> {
        (**self).list_experiences(contact_id)
    }

    fn fixture_version(&self) -> FixtureVersion {
        (**self).fixture_version()
    }

    fn get_contact(&self, id: ContactId) -> Option<&Contact> {
        (**self).get_contact(id)
    }
}

/// Vector-backed repository holding one immutable fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
    experiences: Vec<Experience>,
}

impl InMemoryContactRepository {
    /// Builds a repository after checking id uniqueness and references.
    pub fn try_new(contacts: Vec<Contact>, experiences: Vec<Experience>) -> RepoResult<Self> {
        validate_fixture(&contacts, &experiences)?;
        Ok(Self {
            contacts,
            experiences,
        })
    }

    /// Returns the compiled-in dashboard fixture.
    pub fn builtin() -> Self {
        Self {
            contacts: super::fixture::builtin_contacts(),
            experiences: super::fixture::builtin_experiences(),
        }
    }

    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self {
            contacts: Vec::new(),
            experiences: Vec::new(),
        }
    }

    pub fn from_document(document: FixtureDocument) -> RepoResult<Self> {
        Self::try_new(document.contacts, document.experiences)
    }

    /// Parses a JSON fixture document and validates it.
    pub fn from_json_str(raw: &str) -> RepoResult<Self> {
        let document: FixtureDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    /// Reads and validates a JSON fixture file.
    ///
    /// # Side effects
    /// - Emits `fixture_load` logging events with record counts and status.
    pub fn from_json_file(path: impl AsRef<Path>) -> RepoResult<Self> {
        let result = std::fs::read_to_string(path.as_ref())
            .map_err(RepoError::from)
            .and_then(|raw| Self::from_json_str(&raw));

        match &result {
            Ok(repo) => info!(
                "event=fixture_load module=repo status=ok source=file contacts={} experiences={}",
                repo.contacts.len(),
                repo.experiences.len()
            ),
            Err(err) => error!(
                "event=fixture_load module=repo status=error source=file error={}",
                err
            ),
        }
        result
    }

    pub fn to_document(&self) -> FixtureDocument {
        FixtureDocument {
            contacts: self.contacts.clone(),
            experiences: self.experiences.clone(),
        }
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn list_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn list_experiences(&self, contact_id: ContactId) -> Vec<&Experience> {
        self.experiences
            .iter()
            .filter(|experience| experience.contact_id == contact_id)
            .collect()
    }

    fn fixture_version(&self) -> FixtureVersion {
        FixtureVersion::of(&self.contacts, &self.experiences)
    }
}

fn validate_fixture(contacts: &[Contact], experiences: &[Experience]) -> RepoResult<()> {
    let mut contact_ids = HashSet::with_capacity(contacts.len());
    for contact in contacts {
        if !contact_ids.insert(contact.id) {
            return Err(RepoError::DuplicateContactId(contact.id));
        }
        let labels = [
            ("buyer_persona_type", contact.persona()),
            ("location_country", contact.country()),
        ];
        if let Some((field, _)) = labels.into_iter().find(|(_, label)| *label == SELECTION_ALL) {
            return Err(RepoError::ReservedLabel {
                contact_id: contact.id,
                field,
            });
        }
    }

    let mut experience_ids = HashSet::with_capacity(experiences.len());
    for experience in experiences {
        if !experience_ids.insert(experience.id) {
            return Err(RepoError::DuplicateExperienceId(experience.id));
        }
        if !contact_ids.contains(&experience.contact_id) {
            return Err(RepoError::DanglingExperience {
                experience_id: experience.id,
                contact_id: experience.contact_id,
            });
        }
        if let Some(end) = experience.end_date {
            if end < experience.start_date {
                return Err(RepoError::InvalidExperienceWindow {
                    experience_id: experience.id,
                    start: experience.start_date,
                    end,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_fixture, ContactRepository, InMemoryContactRepository, RepoError};

    #[test]
    fn builtin_fixture_passes_validation() {
        let repo = InMemoryContactRepository::builtin();
        let document = repo.to_document();
        validate_fixture(&document.contacts, &document.experiences)
            .expect("builtin fixture should be well-formed");
    }

    #[test]
    fn validation_rejects_duplicate_contact_ids() {
        let mut document = InMemoryContactRepository::builtin().to_document();
        let duplicate = document.contacts[0].clone();
        document.contacts.push(duplicate);

        let err = InMemoryContactRepository::from_document(document)
            .expect_err("duplicate id must be rejected");
        assert!(matches!(err, RepoError::DuplicateContactId(1)));
    }

    #[test]
    fn validation_rejects_dangling_experience() {
        let mut document = InMemoryContactRepository::builtin().to_document();
        document.experiences[0].contact_id = 999;

        let err = InMemoryContactRepository::from_document(document)
            .expect_err("dangling reference must be rejected");
        assert!(err.to_string().contains("unknown contact 999"));
    }

    #[test]
    fn validation_rejects_label_equal_to_all_selection() {
        let mut document = InMemoryContactRepository::builtin().to_document();
        document.contacts[2].location.country = "all".to_string();

        let err = InMemoryContactRepository::from_document(document)
            .expect_err("reserved label must be rejected");
        assert!(matches!(
            err,
            RepoError::ReservedLabel {
                contact_id: 3,
                field: "location_country",
            }
        ));
    }

    #[test]
    fn version_changes_when_a_single_field_is_edited() {
        let builtin = InMemoryContactRepository::builtin();
        let mut document = builtin.to_document();
        document.contacts[0].location.country = "Canada".to_string();
        let edited = InMemoryContactRepository::from_document(document).unwrap();

        assert_ne!(builtin.fixture_version(), edited.fixture_version());
        assert_eq!(
            builtin.fixture_version(),
            InMemoryContactRepository::builtin().fixture_version()
        );
    }

    #[test]
    fn version_changes_when_an_experience_is_edited() {
        let builtin = InMemoryContactRepository::builtin();
        let mut document = builtin.to_document();
        document.experiences[0].position = "Intern".to_string();
        let edited = InMemoryContactRepository::from_document(document).unwrap();

        assert_ne!(
            builtin.fixture_version().content_hash,
            edited.fixture_version().content_hash
        );
    }

    #[test]
    fn empty_repository_has_no_latest_created_at() {
        let version = InMemoryContactRepository::empty().fixture_version();
        assert_eq!(version.contacts, 0);
        assert_eq!(version.latest_created_at, None);
    }
}
