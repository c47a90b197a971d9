use crate::{
  error::{KgotlaErrorExt, KgotlaErrorType, KgotlaResult},
  settings::SETTINGS,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

type Jwt = String;

/// Claims of the bearer tokens issued by the external identity provider.
/// The server only verifies them, it never issues tokens outside of tests.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// Person id, standard claim by RFC 7519.
  pub sub: i32,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  pub fn decode(jwt: &str) -> KgotlaResult<Claims> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.remove("exp");
    let key = DecodingKey::from_secret(SETTINGS.jwt_secret.as_ref());
    let claims = decode::<Claims>(jwt, &key, &validation)
      .with_kgotla_type(KgotlaErrorType::NotLoggedIn)?
      .claims;
    Ok(claims)
  }

  pub fn generate(person_id: i32) -> KgotlaResult<Jwt> {
    let claims = Claims {
      sub: person_id,
      iss: SETTINGS.hostname.clone(),
      iat: chrono::Utc::now().timestamp(),
    };
    let key = EncodingKey::from_secret(SETTINGS.jwt_secret.as_ref());
    Ok(encode(&Header::default(), &claims, &key)?)
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_generate_and_decode() -> KgotlaResult<()> {
    let jwt = Claims::generate(42)?;
    let claims = Claims::decode(&jwt)?;
    assert_eq!(42, claims.sub);
    Ok(())
  }

  #[test]
  fn test_decode_garbage_fails() {
    let decoded = Claims::decode("definitely.not.a-jwt");
    assert!(decoded.is_err());
  }
}
