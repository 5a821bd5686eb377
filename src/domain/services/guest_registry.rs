use crate::domain::models::{booking::GuestDetails, guest::GuestProfile};
use crate::domain::ports::GuestProfileRepository;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Deduplicating registry over guest identity records.
///
/// Resolution order: explicit profile id, then exact (name, phone), then
/// phone-only with the most recent stay winning. Matched profiles receive a
/// field-level merge: non-empty incoming values overwrite, absent values
/// leave the stored data untouched.
pub struct GuestRegistry {
    repo: Arc<dyn GuestProfileRepository>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn apply_details(profile: &mut GuestProfile, details: &GuestDetails) {
    if let Some(v) = non_empty(&details.name) {
        profile.name = v.to_string();
    }
    if let Some(v) = non_empty(&details.phone_number) {
        profile.phone_number = v.to_string();
    }
    if let Some(v) = non_empty(&details.email) {
        profile.email = Some(v.to_string());
    }
    if let Some(v) = non_empty(&details.id_type) {
        profile.id_type = Some(v.to_string());
    }
    if let Some(v) = non_empty(&details.id_number) {
        profile.id_number = Some(v.to_string());
    }
    if let Some(v) = non_empty(&details.address) {
        profile.address = Some(v.to_string());
    }
    if let Some(v) = non_empty(&details.dob) {
        profile.dob = Some(v.to_string());
    }
    if let Some(v) = non_empty(&details.nationality) {
        profile.nationality = Some(v.to_string());
    }
}

impl GuestRegistry {
    pub fn new(repo: Arc<dyn GuestProfileRepository>) -> Self {
        Self { repo }
    }

    /// Merges the booking's guest snapshot into the registry and returns the
    /// resolved profile id, or None when the details carry neither a name nor
    /// a phone number.
    pub async fn sync_profile(
        &self,
        details: &GuestDetails,
        check_in: &str,
    ) -> Result<Option<i64>, AppError> {
        if !details.is_identifiable() {
            return Ok(None);
        }

        let name = non_empty(&details.name).unwrap_or_default().to_string();
        let phone = non_empty(&details.phone_number).unwrap_or_default().to_string();

        let mut existing = None;
        if let Some(id) = details.profile_id {
            existing = self.repo.find_by_id(id).await?;
        }
        if existing.is_none() && !name.is_empty() && !phone.is_empty() {
            existing = self.repo.find_by_name_phone(&name, &phone).await?;
        }
        if existing.is_none() && !phone.is_empty() {
            existing = self.repo.find_latest_by_phone(&phone).await?;
        }

        if let Some(mut profile) = existing {
            apply_details(&mut profile, details);
            profile.last_check_in = Some(check_in.to_string());
            let updated = self.repo.update(&profile).await?;
            return Ok(Some(updated.id));
        }

        let profile = GuestProfile {
            id: 0, // assigned by the store
            name,
            phone_number: phone,
            email: non_empty(&details.email).map(String::from),
            id_type: non_empty(&details.id_type).map(String::from),
            id_number: non_empty(&details.id_number).map(String::from),
            address: non_empty(&details.address).map(String::from),
            dob: non_empty(&details.dob).map(String::from),
            nationality: non_empty(&details.nationality).map(String::from),
            preferences: None,
            last_check_in: Some(check_in.to_string()),
        };
        let created = self.repo.create(&profile).await?;
        info!("Created guest profile {} for {}", created.id, created.name);
        Ok(Some(created.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_only_non_empty_fields() {
        let mut profile = GuestProfile {
            id: 1,
            name: "Asha Rao".to_string(),
            phone_number: "9811111111".to_string(),
            email: Some("asha@example.com".to_string()),
            id_type: Some("Aadhar".to_string()),
            id_number: Some("1234".to_string()),
            address: Some("Deoghar".to_string()),
            dob: None,
            nationality: Some("Indian".to_string()),
            preferences: Some("Ground floor".to_string()),
            last_check_in: Some("2026-01-01".to_string()),
        };

        let incoming = GuestDetails {
            name: Some("Asha Rao".to_string()),
            phone_number: Some("9811111111".to_string()),
            email: Some("  ".to_string()),
            address: Some("Ranchi".to_string()),
            dob: Some("1990-04-02".to_string()),
            ..Default::default()
        };

        apply_details(&mut profile, &incoming);

        assert_eq!(profile.address.as_deref(), Some("Ranchi"));
        assert_eq!(profile.dob.as_deref(), Some("1990-04-02"));
        // blank incoming email must not clobber the stored one
        assert_eq!(profile.email.as_deref(), Some("asha@example.com"));
        assert_eq!(profile.id_number.as_deref(), Some("1234"));
        assert_eq!(profile.preferences.as_deref(), Some("Ground floor"));
    }
}
