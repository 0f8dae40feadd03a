//! Result-returning guards over the policy predicates.
//!
//! Services call these before any mutating operation; a denial becomes
//! an [`AppError::authorization`] (HTTP 403), distinct from the
//! authentication failures raised by the token extractor (HTTP 401).

use uuid::Uuid;

use labdesk_core::error::AppError;
use labdesk_entity::endorsement::TicketStatus;
use labdesk_entity::user::{Department, UserRole};

use super::actor::Actor;
use super::rules;

/// Require permission to edit a record body.
pub fn require_edit_record(
    actor: &Actor,
    record_department: Department,
    author_id: Uuid,
) -> Result<(), AppError> {
    if rules::can_edit_record(actor, record_department, author_id) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "You do not have permission to edit this record",
        ))
    }
}

/// Require permission to delete an announcement.
pub fn require_delete_announcement(actor: &Actor) -> Result<(), AppError> {
    if rules::can_delete_announcement(actor) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "Only a superadmin can delete an announcement",
        ))
    }
}

/// Require permission to delete a ticket.
pub fn require_delete_ticket(actor: &Actor, record_department: Department) -> Result<(), AppError> {
    if rules::can_delete_ticket(actor, record_department) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "You do not have permission to delete this ticket",
        ))
    }
}

/// Require permission to archive or unarchive an announcement.
pub fn require_archive(actor: &Actor, record_department: Department) -> Result<(), AppError> {
    if rules::can_archive(actor, record_department) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "You do not have permission to archive this announcement",
        ))
    }
}

/// Require permission to close a ticket.
pub fn require_close_ticket(
    actor: &Actor,
    record_department: Department,
    requester_id: Uuid,
    status: TicketStatus,
) -> Result<(), AppError> {
    if rules::can_close_ticket(actor, record_department, requester_id, status) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "You do not have permission to close this ticket",
        ))
    }
}

/// Require permission to reopen a ticket.
pub fn require_reopen_ticket(
    actor: &Actor,
    record_department: Department,
    status: TicketStatus,
) -> Result<(), AppError> {
    if rules::can_reopen_ticket(actor, record_department, status) {
        Ok(())
    } else if status != TicketStatus::Closed {
        Err(AppError::validation("Only a closed ticket can be reopened"))
    } else {
        Err(AppError::authorization(
            "You do not have permission to reopen this ticket",
        ))
    }
}

/// Require permission to edit a comment.
pub fn require_edit_comment(
    actor: &Actor,
    ticket_status: TicketStatus,
    comment_user_id: Uuid,
    comment_username: &str,
) -> Result<(), AppError> {
    if rules::can_edit_comment(actor, ticket_status, comment_user_id, comment_username) {
        Ok(())
    } else if ticket_status.is_closed() {
        Err(AppError::authorization(
            "The communication trail is locked on a closed ticket",
        ))
    } else {
        Err(AppError::authorization(
            "Only the original commenter can edit a comment",
        ))
    }
}

/// Require permission to append a comment to a ticket.
pub fn require_comment_on_ticket(ticket_status: TicketStatus) -> Result<(), AppError> {
    if rules::can_comment_on_ticket(ticket_status) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "The communication trail is locked on a closed ticket",
        ))
    }
}

/// Require permission to view a comment's edit history.
pub fn require_view_edit_history(actor: &Actor) -> Result<(), AppError> {
    if rules::can_view_edit_history(actor) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "Only admins can view comment edit history",
        ))
    }
}

/// Require permission to manage user accounts.
pub fn require_manage_users(actor: &Actor) -> Result<(), AppError> {
    if rules::can_manage_users(actor) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "Only admins can manage user accounts",
        ))
    }
}

/// Require permission to act on an account with the given role.
pub fn require_manage_user_with_role(actor: &Actor, target_role: UserRole) -> Result<(), AppError> {
    if rules::can_manage_user_with_role(actor, target_role) {
        Ok(())
    } else {
        Err(AppError::authorization(
            "Only a superadmin can manage admin accounts",
        ))
    }
}
