// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Trabaho Labs <dev@trabaho.ph>

//! Status-to-style lookup for ledger rows.
//!
//! Total over every input: a status the client has never heard of gets the
//! neutral style, never an error. Icon names and color tokens match the
//! design system used by the mobile and web clients.

use crate::domain::model::TransactionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub icon: &'static str,
    pub color_token: &'static str,
}

pub const NEUTRAL_STYLE: StatusStyle = StatusStyle {
    icon: "ellipse",
    color_token: "textSecondary",
};

pub fn status_style(status: &TransactionStatus) -> StatusStyle {
    match status {
        TransactionStatus::Completed | TransactionStatus::Released => StatusStyle {
            icon: "checkmark-circle",
            color_token: "success",
        },
        TransactionStatus::Pending => StatusStyle {
            icon: "time",
            color_token: "warning",
        },
        TransactionStatus::Failed => StatusStyle {
            icon: "close-circle",
            color_token: "error",
        },
        TransactionStatus::Withdrawn | TransactionStatus::Unknown(_) => NEUTRAL_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_design_tokens() {
        assert_eq!(
            status_style(&TransactionStatus::Released).color_token,
            "success"
        );
        assert_eq!(
            status_style(&TransactionStatus::Completed).icon,
            "checkmark-circle"
        );
        assert_eq!(status_style(&TransactionStatus::Pending).icon, "time");
        assert_eq!(
            status_style(&TransactionStatus::Failed).color_token,
            "error"
        );
    }

    #[test]
    fn unknown_status_falls_back_to_neutral() {
        let status = TransactionStatus::from("escrow_review".to_string());
        assert_eq!(status_style(&status), NEUTRAL_STYLE);
    }

    #[test]
    fn withdrawn_uses_neutral_style() {
        assert_eq!(status_style(&TransactionStatus::Withdrawn), NEUTRAL_STYLE);
    }
}
