pub mod claims;
pub mod codec;
pub mod guards;
pub mod roles;

pub use claims::Claims;
pub use codec::{decode, has_elevated_role, is_expired, is_expired_at, role_of};
pub use guards::{
    evaluate_admin_access, is_admin_route, GuardDecision, ADMIN_LOGIN_PATH, HOME_PATH,
};
pub use roles::{ELEVATED_ROLES, ROLE_ADMIN, ROLE_EMPLOYEE, ROLE_USER};
