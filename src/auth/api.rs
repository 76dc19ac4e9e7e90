use serde::Serialize;

use crate::auth::wire::AuthEnvelope;
use crate::core::{GsClient, GsError, models::User, net};

#[derive(Serialize)]
struct SignupPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

pub(crate) async fn signup(
    client: &GsClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, GsError> {
    let url = client.endpoint("v1/auth/signup")?;
    let payload = SignupPayload {
        name,
        email,
        password,
    };

    let req = client.http().post(url).json(&payload);
    let resp = client.send_with_retry(req, None, None).await?;

    let env: AuthEnvelope = net::read_json(resp, "signup").await?;
    let user = env
        .user
        .ok_or_else(|| GsError::Data("signup response missing user".into()))?;
    Ok(user.into())
}

pub(crate) async fn login(
    client: &GsClient,
    email: &str,
    password: &str,
) -> Result<User, GsError> {
    let url = client.endpoint("v1/auth/login")?;
    let payload = LoginPayload { email, password };

    let req = client.http().post(url).json(&payload);
    let resp = client.send_with_retry(req, None, None).await?;

    let env: AuthEnvelope = net::read_json(resp, "login").await?;
    let user = env
        .user
        .ok_or_else(|| GsError::Data("login response missing user".into()))?;
    Ok(user.into())
}
