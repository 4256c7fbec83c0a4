// ABOUTME: CLI login, register and logout commands
//
// Missing fields are prompted for interactively; the token and user returned
// by the server are stored in the session file.

use anyhow::{bail, Context as _, Result};
use dialoguer::{Input, Password};
use tracing::info;

use super::util::Context;
use super::{LoginArgs, RegisterArgs};
use crate::api::{LoginRequest, RegisterRequest, Role};

const LOGIN_FAILED: &str = "Đăng nhập thất bại";
const REGISTER_FAILED: &str = "Đăng ký thất bại";
const INCOMPLETE: &str = "Vui lòng điền đầy đủ thông tin";

fn prompt_text(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {label}"))
}

fn prompt_password() -> Result<String> {
    Password::new()
        .with_prompt("Mật khẩu")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read password")
}

/// Registration fields, checked before anything is sent
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub password: String,
}

impl RegisterForm {
    /// Every field must be non-blank
    pub fn into_request(self, role: Role) -> Result<RegisterRequest> {
        let fields = [&self.name, &self.phone, &self.address, &self.password];
        if fields.iter().any(|f| f.trim().is_empty()) {
            bail!(INCOMPLETE);
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password,
            role,
            address: self.address.trim().to_string(),
        })
    }
}

/// Execute the login command
pub async fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    let phone = match args.phone {
        Some(phone) => phone,
        None => prompt_text("Số điện thoại")?,
    };
    let password = prompt_password()?;
    if phone.trim().is_empty() || password.is_empty() {
        bail!(INCOMPLETE);
    }

    let client = ctx.client()?;
    let payload = client
        .login(&LoginRequest {
            phone: phone.trim().to_string(),
            password,
        })
        .await
        .context("Failed to reach the login endpoint")?
        .into_data(LOGIN_FAILED)?;

    let session = ctx.store.store_auth(payload)?;
    let name = session.user.map(|u| u.name).unwrap_or_default();
    info!("Logged in as {}", name);
    println!("Xin chào {name}! Đăng nhập thành công.");
    Ok(())
}

/// Execute the register command
pub async fn register(ctx: &Context, args: RegisterArgs) -> Result<()> {
    println!("Đăng ký tài khoản {}", args.role.label());

    let form = RegisterForm {
        name: match args.name {
            Some(name) => name,
            None => prompt_text("Họ tên")?,
        },
        phone: match args.phone {
            Some(phone) => phone,
            None => prompt_text("Số điện thoại")?,
        },
        address: match args.address {
            Some(address) => address,
            None => prompt_text("Địa chỉ")?,
        },
        password: prompt_password()?,
    };
    let request = form.into_request(args.role)?;

    let client = ctx.client()?;
    let payload = client
        .register(&request)
        .await
        .context("Failed to reach the register endpoint")?
        .into_data(REGISTER_FAILED)?;

    ctx.store.store_auth(payload)?;
    info!("Registered new {} account", args.role);
    println!("Đăng ký thành công! Bạn đã được đăng nhập.");
    Ok(())
}

/// Execute the logout command
pub fn logout(ctx: &Context) -> Result<()> {
    ctx.store.clear()?;
    info!("Session cleared");
    println!("Đã đăng xuất.");
    Ok(())
}
