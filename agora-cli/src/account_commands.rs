use agora_client::AuthError;
use agora_types::forms::{DeveloperForm, LoginForm, RegisterForm};
use agora_types::view::format_date;
use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use crate::cli::RegisterArgs;
use crate::commands::{read_password, AppContext};

pub async fn login(ctx: &AppContext, email: String, password: Option<String>) -> Result<()> {
    let form = LoginForm { email, password: read_password(password)? };
    let request = form.validate()?;
    let user = ctx.auth.login(&request).await?;
    println!("{} Signed in as {} ({})", "✓".green(), user.nickname.cyan().bold(), user.email);
    Ok(())
}

pub fn logout(ctx: &AppContext) {
    ctx.auth.logout();
    println!("{} Signed out", "✓".green());
}

pub async fn whoami(ctx: &AppContext, json: bool) -> Result<()> {
    let user = ctx.require_user().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec![Cell::new("Nickname"), Cell::new(&user.nickname)]);
    table.add_row(vec![Cell::new("Email"), Cell::new(&user.email)]);
    let role = if user.is_developer() { Cell::new("Developer").fg(Color::Cyan) } else { Cell::new(user.role.label()) };
    table.add_row(vec![Cell::new("Role"), role]);
    table.add_row(vec![Cell::new("Member since"), Cell::new(format_date(&user.created_at))]);
    if let Some(dev) = &user.developer {
        table.add_row(vec![Cell::new("Developer"), Cell::new(dev.full_name())]);
        if let Some(github) = dev.github_profile.as_deref() {
            table.add_row(vec![Cell::new("GitHub"), Cell::new(github)]);
        }
        let verified = if dev.verified { Cell::new("Verified").fg(Color::Green) } else { Cell::new("Not verified") };
        table.add_row(vec![Cell::new("Status"), verified]);
    }
    println!("{table}");
    Ok(())
}

pub async fn register(ctx: &AppContext, args: RegisterArgs) -> Result<()> {
    let password = read_password(args.password)?;
    let form = RegisterForm {
        email: args.email,
        nickname: args.nickname,
        confirm_password: password.clone(),
        password,
        as_developer: args.developer,
    };
    let request = form.validate()?;

    let developer = if form.as_developer {
        let dev = DeveloperForm {
            first_name: args.first_name,
            last_name: args.last_name,
            github_profile: args.github,
            support_email: args.support_email,
            support_phone: args.support_phone,
        };
        Some(dev.validate()?)
    } else {
        None
    };

    match ctx.auth.register(&request, developer).await {
        Ok(()) => {},
        Err(AuthError::DeveloperProfile(e)) => {
            println!("{} Account created, but the developer profile was rejected", "!".yellow());
            return Err(e).context("Developer profile not created; retry after `agora login`");
        },
        Err(e) => return Err(e.into()),
    }

    println!("{} Account {} created", "✓".green(), form.nickname.cyan().bold());
    if ctx.auth.state().is_authenticated() {
        println!("  Signed in as {}", form.email);
    } else {
        println!("  Run `agora login -e {}` to sign in", form.email);
    }
    Ok(())
}
