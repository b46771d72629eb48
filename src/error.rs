//! API Error Type and User-Facing Formatting
//!
//! One tagged error, built once at the API client boundary, so every caller
//! branches on `kind` instead of probing response shapes. `format_api_error`
//! turns any variant into a single localized sentence (or a bulleted list
//! for multi-field validation failures).

use std::fmt;

use serde::Deserialize;

/// One field-level validation failure as reported by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationError {
    pub field: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub rule: Option<String>,
}

/// Normalized API failure.
///
/// `Validation` and `Server` carry the HTTP status of the response that
/// produced them; `Transport` means no response was received at all
/// (connection refused, DNS, timeout); `Unknown` covers everything that is
/// not an HTTP exchange gone wrong (undecodable body, local precondition).
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Validation {
        status: u16,
        errors: Vec<ValidationError>,
    },
    Server {
        status: u16,
        message: Option<String>,
    },
    Transport(String),
    Unknown(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Unknown(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_api_error(self))
    }
}

impl std::error::Error for ApiError {}

/// Sentence per HTTP status code
const HTTP_ERROR_MESSAGES: &[(u16, &str)] = &[
    (400, "Les données fournies sont invalides. Veuillez vérifier votre saisie."),
    (401, "Vous devez vous connecter pour effectuer cette action."),
    (403, "Vous n'avez pas les permissions nécessaires pour effectuer cette action."),
    (404, "La ressource demandée est introuvable."),
    (409, "Cette ressource existe déjà ou un conflit a été détecté."),
    (422, "Les données fournies ne sont pas valides."),
    (429, "Trop de requêtes. Veuillez patienter quelques instants."),
    (500, "Une erreur serveur est survenue. Veuillez réessayer dans quelques instants."),
    (502, "Le serveur est temporairement indisponible. Veuillez réessayer."),
    (503, "Le service est temporairement indisponible. Veuillez réessayer plus tard."),
];

/// Default message per validation rule, used when the API sends none
const VALIDATION_RULE_MESSAGES: &[(&str, &str)] = &[
    ("required", "Ce champ est obligatoire"),
    ("email", "L'adresse email n'est pas valide"),
    ("minLength", "La valeur est trop courte"),
    ("maxLength", "La valeur est trop longue"),
    ("unique", "Cette valeur existe déjà"),
    ("exists", "Cette ressource n'existe pas"),
    ("min", "La valeur est trop petite"),
    ("max", "La valeur est trop grande"),
];

/// Display label per API field name
const FIELD_LABELS: &[(&str, &str)] = &[
    ("title", "Titre"),
    ("name", "Nom"),
    ("description", "Description"),
    ("email", "Email"),
    ("password", "Mot de passe"),
    ("status", "Statut"),
    ("level", "Priorité"),
    ("categoryId", "Catégorie"),
];

const TRANSPORT_MESSAGE: &str =
    "Impossible de contacter le serveur. Vérifiez votre connexion internet.";
const UNKNOWN_MESSAGE: &str = "Une erreur inconnue est survenue. Veuillez réessayer.";

/// Extract a user-facing message from any API failure.
///
/// Resolution order: validation details, then the server's own message, then
/// the per-status sentence, then transport/unknown fallbacks.
pub fn format_api_error(error: &ApiError) -> String {
    match error {
        ApiError::Validation { errors, .. } => format_validation_errors(errors),
        ApiError::Server { message: Some(message), .. } => message.clone(),
        ApiError::Server { status, message: None } => HTTP_ERROR_MESSAGES
            .iter()
            .find(|(code, _)| code == status)
            .map(|(_, sentence)| (*sentence).to_string())
            .unwrap_or_else(|| format!("Erreur {} : Une erreur est survenue.", status)),
        ApiError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
        ApiError::Unknown(message) if !message.is_empty() => message.clone(),
        ApiError::Unknown(_) => UNKNOWN_MESSAGE.to_string(),
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    match errors {
        [] => "Les données fournies ne sont pas valides.".to_string(),
        [only] => format!("{} : {}", field_label(&only.field), validation_message(only)),
        _ => {
            let lines: Vec<String> = errors
                .iter()
                .map(|error| {
                    format!("• {} : {}", field_label(&error.field), validation_message(error))
                })
                .collect();
            format!("Erreurs de validation :\n{}", lines.join("\n"))
        }
    }
}

/// The API's own message wins; otherwise the rule-keyed default; otherwise a
/// generic invalid-value string.
fn validation_message(error: &ValidationError) -> String {
    if let Some(message) = error.message.as_deref().filter(|m| !m.is_empty()) {
        return message.to_string();
    }
    error
        .rule
        .as_deref()
        .and_then(|rule| {
            VALIDATION_RULE_MESSAGES
                .iter()
                .find(|(key, _)| *key == rule)
                .map(|(_, default)| (*default).to_string())
        })
        .unwrap_or_else(|| "La valeur n'est pas valide".to_string())
}

fn field_label(field: &str) -> String {
    FIELD_LABELS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| field.to_string())
}

pub fn is_auth_error(error: &ApiError) -> bool {
    error.status() == Some(401)
}

pub fn is_permission_error(error: &ApiError) -> bool {
    error.status() == Some(403)
}

pub fn is_not_found_error(error: &ApiError) -> bool {
    error.status() == Some(404)
}
