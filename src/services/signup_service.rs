use crate::store::{ActivityStore, StoreError};

/// Sign `email` up for the named activity and return the confirmation
/// message for the response body.
pub fn sign_up(store: &ActivityStore, name: &str, email: &str) -> Result<String, StoreError> {
    store.add_participant(name, email)?;
    Ok(format!("Signed up {} for {}", email, name))
}

/// Remove `email` from the named activity's roster.
pub fn unregister(store: &ActivityStore, name: &str, email: &str) -> Result<String, StoreError> {
    store.remove_participant(name, email)?;
    Ok(format!("Unregistered {} from {}", email, name))
}
