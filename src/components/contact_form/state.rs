use super::validation::{validate, Field};
use crate::api::{deliver, ContactSubmission, FormTransport, SubmitError};
use crate::utils::delay_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "success-message",
            BannerKind::Error => "error-message",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            BannerKind::Success => "Thank you! Your message has been sent successfully.",
            BannerKind::Error => "There was an error sending your message. Please try again.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            BannerKind::Success => "check",
            BannerKind::Error => "alert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    message: Option<&'static str>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }
}

/// Everything the contact form shows: field values, inline errors, the
/// in-flight flag and the stack of transient banners (newest first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    name: String,
    email: String,
    message: String,
    errors: FieldErrors,
    submitting: bool,
    banners: Vec<Banner>,
    next_banner_id: u64,
}

impl ContactFormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    /// Re-run one field's rule, replacing its previous error. Used on blur.
    pub fn validate_field(&mut self, field: Field) -> bool {
        let outcome = validate(field, self.value(field)).err();
        *self.errors.slot(field) = outcome;
        outcome.is_none()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    /// Validate every field and, when all pass, enter the in-flight state and
    /// hand back the payload to post. Returns `None` while a submission is
    /// already running or when any field is invalid.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }

        let mut all_valid = true;
        for field in Field::ALL {
            all_valid &= self.validate_field(field);
        }
        if !all_valid {
            return None;
        }

        self.submitting = true;
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Leave the in-flight state and show the outcome. Fields are cleared only
    /// on success. Returns the id of the banner to dismiss later.
    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) -> u64 {
        self.submitting = false;

        let kind = match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.errors = FieldErrors::default();
                BannerKind::Success
            }
            Err(_) => BannerKind::Error,
        };

        let id = self.next_banner_id;
        self.next_banner_id += 1;
        self.banners.insert(0, Banner { id, kind });
        id
    }

    pub fn dismiss_banner(&mut self, id: u64) {
        self.banners.retain(|banner| banner.id != id);
    }
}

/// Somewhere the form state lives between awaits (a signal in the page).
pub trait FormStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactFormState) -> R) -> R;
}

/// Post an accepted submission, show its outcome banner and remove that
/// banner again once `banner_lifetime_ms` has passed.
pub async fn submit_and_expire<T, S>(
    transport: &T,
    action: &str,
    submission: ContactSubmission,
    banner_lifetime_ms: u64,
    mut store: S,
) where
    T: FormTransport + ?Sized,
    S: FormStore,
{
    let result = deliver(transport, action, &submission).await;
    let banner = store.update(|form| form.finish_submit(&result));
    delay_ms(banner_lifetime_ms).await;
    store.update(|form| form.dismiss_banner(banner));
}
