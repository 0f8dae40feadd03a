//! Pure authorization predicates, one per action.
//!
//! Role precedence: superadmin > admin > it > user. Department-admin
//! authority never crosses department boundaries; a superadmin is never
//! scoped.

use uuid::Uuid;

use labdesk_entity::endorsement::TicketStatus;
use labdesk_entity::user::{Department, UserRole};

use super::actor::Actor;

/// Edit an announcement or ticket body.
///
/// Permitted for a superadmin, the record's author, or an admin of the
/// record's department.
pub fn can_edit_record(actor: &Actor, record_department: Department, author_id: Uuid) -> bool {
    actor.role == UserRole::Superadmin
        || actor.id == author_id
        || actor.is_department_admin(record_department)
}

/// Delete an announcement. Superadmin only.
pub fn can_delete_announcement(actor: &Actor) -> bool {
    actor.role == UserRole::Superadmin
}

/// Delete a ticket. Superadmin, or an admin of the ticket's department.
pub fn can_delete_ticket(actor: &Actor, record_department: Department) -> bool {
    actor.role == UserRole::Superadmin || actor.is_department_admin(record_department)
}

/// Archive or unarchive an announcement.
///
/// Permitted for superadmin and IT roles anywhere, or an admin of the
/// announcement's department.
pub fn can_archive(actor: &Actor, record_department: Department) -> bool {
    matches!(actor.role, UserRole::Superadmin | UserRole::It)
        || actor.is_department_admin(record_department)
}

/// Close a ticket.
///
/// Permitted for a superadmin, an admin of the ticket's department, or
/// the requester themselves while the ticket is still open.
pub fn can_close_ticket(
    actor: &Actor,
    record_department: Department,
    requester_id: Uuid,
    status: TicketStatus,
) -> bool {
    actor.role == UserRole::Superadmin
        || actor.is_department_admin(record_department)
        || (status == TicketStatus::Open && actor.id == requester_id)
}

/// Reopen a ticket. Only a closed ticket can be reopened, and only by a
/// superadmin or an admin of the ticket's department.
pub fn can_reopen_ticket(actor: &Actor, record_department: Department, status: TicketStatus) -> bool {
    status == TicketStatus::Closed
        && (actor.role == UserRole::Superadmin || actor.is_department_admin(record_department))
}

/// Edit a comment in a ticket's communication trail.
///
/// Permitted only while the ticket is not closed, and only for the
/// original commenter (matched by id or username).
pub fn can_edit_comment(
    actor: &Actor,
    ticket_status: TicketStatus,
    comment_user_id: Uuid,
    comment_username: &str,
) -> bool {
    !ticket_status.is_closed()
        && (actor.id == comment_user_id || actor.username == comment_username)
}

/// Append a comment to a ticket's communication trail.
///
/// Any authenticated user may comment while the ticket is not closed.
pub fn can_comment_on_ticket(ticket_status: TicketStatus) -> bool {
    !ticket_status.is_closed()
}

/// View a comment's edit history. Admins and superadmins only.
pub fn can_view_edit_history(actor: &Actor) -> bool {
    matches!(actor.role, UserRole::Admin | UserRole::Superadmin)
}

/// Manage user accounts (list, register, update, delete).
///
/// Admins and superadmins only; touching an admin or superadmin account
/// additionally requires superadmin (checked separately per target).
pub fn can_manage_users(actor: &Actor) -> bool {
    matches!(actor.role, UserRole::Admin | UserRole::Superadmin)
}

/// Act on a user account with the given role.
///
/// Admin/superadmin target accounts may only be touched by a superadmin.
pub fn can_manage_user_with_role(actor: &Actor, target_role: UserRole) -> bool {
    match target_role {
        UserRole::Admin | UserRole::Superadmin => actor.role == UserRole::Superadmin,
        UserRole::User | UserRole::It => can_manage_users(actor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [UserRole; 4] = [
        UserRole::User,
        UserRole::Admin,
        UserRole::It,
        UserRole::Superadmin,
    ];

    fn actor(role: UserRole, department: Department) -> Actor {
        Actor::new(Uuid::new_v4(), "actor", role, department)
    }

    /// Expected edit permission, written out directly from the rule table.
    fn expect_edit(role: UserRole, same_dept: bool, is_author: bool) -> bool {
        role == UserRole::Superadmin || is_author || (role == UserRole::Admin && same_dept)
    }

    #[test]
    fn test_edit_record_cross_product() {
        for role in ROLES {
            for actor_dept in Department::ALL {
                for record_dept in Department::ALL {
                    for is_author in [false, true] {
                        let a = actor(role, actor_dept);
                        let author_id = if is_author { a.id } else { Uuid::new_v4() };
                        assert_eq!(
                            can_edit_record(&a, record_dept, author_id),
                            expect_edit(role, actor_dept == record_dept, is_author),
                            "role={role} actor_dept={actor_dept} record_dept={record_dept} author={is_author}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_delete_announcement_superadmin_only() {
        for role in ROLES {
            for dept in Department::ALL {
                assert_eq!(
                    can_delete_announcement(&actor(role, dept)),
                    role == UserRole::Superadmin,
                    "role={role}"
                );
            }
        }
    }

    #[test]
    fn test_delete_ticket_cross_product() {
        for role in ROLES {
            for actor_dept in Department::ALL {
                for record_dept in Department::ALL {
                    let expected = role == UserRole::Superadmin
                        || (role == UserRole::Admin && actor_dept == record_dept);
                    assert_eq!(
                        can_delete_ticket(&actor(role, actor_dept), record_dept),
                        expected,
                        "role={role} actor_dept={actor_dept} record_dept={record_dept}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_archive_cross_product() {
        for role in ROLES {
            for actor_dept in Department::ALL {
                for record_dept in Department::ALL {
                    let expected = matches!(role, UserRole::Superadmin | UserRole::It)
                        || (role == UserRole::Admin && actor_dept == record_dept);
                    assert_eq!(
                        can_archive(&actor(role, actor_dept), record_dept),
                        expected,
                        "role={role} actor_dept={actor_dept} record_dept={record_dept}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_close_ticket_cross_product() {
        const STATUSES: [TicketStatus; 3] = [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Closed,
        ];
        for role in ROLES {
            for actor_dept in Department::ALL {
                for record_dept in Department::ALL {
                    for status in STATUSES {
                        for is_requester in [false, true] {
                            let a = actor(role, actor_dept);
                            let requester = if is_requester { a.id } else { Uuid::new_v4() };
                            let expected = role == UserRole::Superadmin
                                || (role == UserRole::Admin && actor_dept == record_dept)
                                || (status == TicketStatus::Open && is_requester);
                            assert_eq!(
                                can_close_ticket(&a, record_dept, requester, status),
                                expected,
                                "role={role} actor_dept={actor_dept} record_dept={record_dept} \
                                 status={status} requester={is_requester}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_reopen_requires_closed() {
        for role in ROLES {
            for actor_dept in Department::ALL {
                for record_dept in Department::ALL {
                    let a = actor(role, actor_dept);
                    // Never reopenable unless closed.
                    assert!(!can_reopen_ticket(&a, record_dept, TicketStatus::Open));
                    assert!(!can_reopen_ticket(&a, record_dept, TicketStatus::InProgress));

                    let expected = role == UserRole::Superadmin
                        || (role == UserRole::Admin && actor_dept == record_dept);
                    assert_eq!(
                        can_reopen_ticket(&a, record_dept, TicketStatus::Closed),
                        expected,
                        "role={role} actor_dept={actor_dept} record_dept={record_dept}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_edit_comment_rules() {
        let a = actor(UserRole::User, Department::Laboratory);

        // Own comment on an open ticket: allowed.
        assert!(can_edit_comment(&a, TicketStatus::Open, a.id, "actor"));
        // Matched by username alone: allowed.
        assert!(can_edit_comment(
            &a,
            TicketStatus::Open,
            Uuid::new_v4(),
            "actor"
        ));
        // Someone else's comment: denied, even for superadmin.
        let sa = actor(UserRole::Superadmin, Department::Laboratory);
        assert!(!can_edit_comment(
            &sa,
            TicketStatus::Open,
            Uuid::new_v4(),
            "someone-else"
        ));
        // Closed ticket locks the trail for everyone.
        assert!(!can_edit_comment(&a, TicketStatus::Closed, a.id, "actor"));
    }

    #[test]
    fn test_comment_append_locked_when_closed() {
        assert!(can_comment_on_ticket(TicketStatus::Open));
        assert!(can_comment_on_ticket(TicketStatus::InProgress));
        assert!(!can_comment_on_ticket(TicketStatus::Closed));
    }

    #[test]
    fn test_view_edit_history() {
        for role in ROLES {
            let expected = matches!(role, UserRole::Admin | UserRole::Superadmin);
            assert_eq!(
                can_view_edit_history(&actor(role, Department::Others)),
                expected,
                "role={role}"
            );
        }
    }

    #[test]
    fn test_user_management_rules() {
        for role in ROLES {
            let a = actor(role, Department::Others);
            let expected = matches!(role, UserRole::Admin | UserRole::Superadmin);
            assert_eq!(can_manage_users(&a), expected, "role={role}");

            // Privileged targets need superadmin.
            for target in [UserRole::Admin, UserRole::Superadmin] {
                assert_eq!(
                    can_manage_user_with_role(&a, target),
                    role == UserRole::Superadmin,
                    "role={role} target={target}"
                );
            }
            for target in [UserRole::User, UserRole::It] {
                assert_eq!(can_manage_user_with_role(&a, target), expected);
            }
        }
    }
}
