// ABOUTME: CLI apply command - send an application with contact details to a job owner

use anyhow::{bail, Context as _, Result};
use tracing::info;

use super::util::Context;
use super::ApplyArgs;
use crate::api::ApplyRequest;
use crate::session::SessionProvider;

const DEFAULT_NOTE: &str = "Tôi muốn ứng tuyển công việc này.";
const NO_ZALO: &str = "Không có";
const APPLY_FAILED: &str = "Ứng tuyển thất bại";

/// Build the application text the owner reads
#[must_use]
pub fn compose_application_message(
    name: &str,
    phone: &str,
    zalo: Option<&str>,
    note: Option<&str>,
) -> String {
    let zalo = zalo.map(str::trim).filter(|z| !z.is_empty()).unwrap_or(NO_ZALO);
    let note = note.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(DEFAULT_NOTE);
    format!(
        "Thông tin ứng viên:\n- Họ tên: {name}\n- SĐT: {phone}\n- Zalo: {zalo}\n- Lời nhắn: {note}"
    )
}

/// Execute the apply command
pub async fn execute(ctx: &Context, args: ApplyArgs) -> Result<()> {
    let client = ctx.authenticated_client("ứng tuyển")?;
    let user = ctx.store.user();

    let phone = args
        .phone
        .or_else(|| user.as_ref().map(|u| u.phone.clone()))
        .unwrap_or_default();
    if phone.trim().is_empty() {
        bail!("Vui lòng nhập số điện thoại");
    }
    let name = user.map(|u| u.name).unwrap_or_default();

    let message = compose_application_message(
        &name,
        phone.trim(),
        args.zalo.as_deref(),
        args.message.as_deref(),
    );

    client
        .apply(args.job_id, &ApplyRequest { message })
        .await
        .context("Failed to send application")?
        .into_ack(APPLY_FAILED)?;

    info!("Applied to job {}", args.job_id);
    println!("Đã gửi hồ sơ thành công!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_with_all_fields() {
        let message = compose_application_message(
            "Nguyễn Văn Bình",
            "0909123456",
            Some("0909123456"),
            Some("Tôi có 3 năm kinh nghiệm"),
        );
        assert_eq!(
            message,
            "Thông tin ứng viên:\n- Họ tên: Nguyễn Văn Bình\n- SĐT: 0909123456\n- Zalo: 0909123456\n- Lời nhắn: Tôi có 3 năm kinh nghiệm"
        );
    }

    #[test]
    fn test_message_defaults() {
        let message = compose_application_message("Bình", "0909", None, Some("  "));
        assert!(message.contains("- Zalo: Không có"));
        assert!(message.ends_with("- Lời nhắn: Tôi muốn ứng tuyển công việc này."));
    }
}
