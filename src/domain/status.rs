use serde::{Deserialize, Serialize};

/// Task lifecycle status. The variant order is the badge click-cycle order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    Waiting,
    InProgress,
    Done,
    OnHold,
    Problem,
}

pub const STATUS_ORDER: [Status; 5] = [
    Status::Waiting,
    Status::InProgress,
    Status::Done,
    Status::OnHold,
    Status::Problem,
];

/// Display color category for a status badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Secondary,
    Primary,
    Success,
    Warning,
    Danger,
}

impl BadgeColor {
    pub fn class(self) -> &'static str {
        match self {
            BadgeColor::Secondary => "secondary",
            BadgeColor::Primary => "primary",
            BadgeColor::Success => "success",
            BadgeColor::Warning => "warning",
            BadgeColor::Danger => "danger",
        }
    }
}

impl Status {
    pub fn from_label(label: &str) -> Option<Status> {
        match label {
            "대기" => Some(Status::Waiting),
            "진행중" => Some(Status::InProgress),
            "완료" => Some(Status::Done),
            "보류" => Some(Status::OnHold),
            "문제" => Some(Status::Problem),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Waiting => "대기",
            Status::InProgress => "진행중",
            Status::Done => "완료",
            Status::OnHold => "보류",
            Status::Problem => "문제",
        }
    }

    /// Successor in the fixed circular order.
    pub fn next(self) -> Status {
        let index = STATUS_ORDER.iter().position(|s| *s == self).unwrap_or(0);
        STATUS_ORDER[(index + 1) % STATUS_ORDER.len()]
    }

    pub fn badge_color(self) -> BadgeColor {
        match self {
            Status::Waiting => BadgeColor::Secondary,
            Status::InProgress => BadgeColor::Primary,
            Status::Done => BadgeColor::Success,
            Status::OnHold => BadgeColor::Warning,
            Status::Problem => BadgeColor::Danger,
        }
    }
}

/// Total successor over raw labels: an unrecognized label behaves as index
/// -1, so its successor is the first status in the order. This is the sole
/// mutation rule for status cells and has no failure case.
pub fn next_label(current: &str) -> &'static str {
    match Status::from_label(current) {
        Some(status) => status.next().label(),
        None => STATUS_ORDER[0].label(),
    }
}

/// Badge color for a raw label; unknown labels fall back to the default
/// category rather than failing.
pub fn badge_color_for(label: &str) -> BadgeColor {
    Status::from_label(label)
        .map(Status::badge_color)
        .unwrap_or(BadgeColor::Secondary)
}

pub fn is_done(label: &str) -> bool {
    Status::from_label(label) == Some(Status::Done)
}

pub fn is_problem(label: &str) -> bool {
    Status::from_label(label) == Some(Status::Problem)
}

pub fn is_on_hold(label: &str) -> bool {
    Status::from_label(label) == Some(Status::OnHold)
}
