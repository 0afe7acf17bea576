// ============================================================================
// USER - Perfil de usuario y roles
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};

/// Roles conocidos por el backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Gestionnaire,
    Agent,
}

// Un rol desconocido se degrada a Agent para nunca ampliar permisos
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Role::parse(&value))
    }
}

impl Role {
    pub fn parse(value: &str) -> Role {
        match value {
            "admin" => Role::Admin,
            "gestionnaire" => Role::Gestionnaire,
            _ => Role::Agent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Gestionnaire => "gestionnaire",
            Role::Agent => "agent",
        }
    }
}

/// Perfil entregado por POST /auth/login y persistido en localStorage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub nom: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub departement: Option<String>,
}

/// Respuesta de POST /auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Payload de POST /auth/register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nom: String,
    pub email: String,
    pub mot_de_passe: String,
    pub role: Role,
    pub departement: String,
}

/// Borrador del formulario de creación de usuario (valores crudos de los inputs)
#[derive(Debug, Clone)]
pub struct RegisterDraft {
    pub nom: String,
    pub email: String,
    pub mot_de_passe: String,
    pub role: String,
    pub departement: String,
}

impl Default for RegisterDraft {
    fn default() -> Self {
        Self {
            nom: String::new(),
            email: String::new(),
            mot_de_passe: String::new(),
            role: "agent".to_string(),
            departement: String::new(),
        }
    }
}

impl RegisterDraft {
    pub fn to_payload(&self) -> RegisterRequest {
        RegisterRequest {
            nom: self.nom.clone(),
            email: self.email.clone(),
            mot_de_passe: self.mot_de_passe.clone(),
            role: Role::parse(&self.role),
            departement: self.departement.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("gestionnaire"), Role::Gestionnaire);
        assert_eq!(Role::parse("agent"), Role::Agent);
    }

    #[test]
    fn test_role_parse_unknown_degrades_to_agent() {
        assert_eq!(Role::parse("superviseur"), Role::Agent);
        assert_eq!(Role::parse(""), Role::Agent);
    }

    #[test]
    fn test_role_deserialize_unknown_degrades_to_agent() {
        let user: User = serde_json::from_str(
            r#"{"nom":"Marie","role":"directeur"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Agent);
    }

    #[test]
    fn test_user_roundtrip_keeps_role_lowercase() {
        let user = User {
            id: Some("u1".to_string()),
            nom: "Marie".to_string(),
            email: Some("marie@demo.fr".to_string()),
            role: Role::Gestionnaire,
            departement: Some("Nord".to_string()),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""role":"gestionnaire""#));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_register_draft_parses_role() {
        let mut draft = RegisterDraft::default();
        draft.role = "admin".to_string();
        assert_eq!(draft.to_payload().role, Role::Admin);
    }
}
