// Pure authorization decisions for resource-mutating operations

use uuid::Uuid;

use crate::auth::models::Role;

/// True iff the actor may mutate a resource owned by `owner_id`: either the
/// actor carries the ADMIN role, or the actor is the owner.
///
/// Pure predicate, no I/O; callers translate `false` into a Forbidden error.
pub fn can_mutate(actor_id: Uuid, actor_roles: &[String], owner_id: Uuid) -> bool {
    has_role(actor_roles, Role::Admin) || actor_id == owner_id
}

/// Case-insensitive role membership test.
///
/// Role names are uppercase constants everywhere they are seeded, so the
/// case-insensitive match is laxer than strictly needed; it is kept for
/// compatibility with existing tokens.
pub fn has_role(actor_roles: &[String], role: Role) -> bool {
    actor_roles
        .iter()
        .any(|name| name.eq_ignore_ascii_case(role.as_str()))
}
