/*
 * Responsibility
 * - AccessRequirement (宣言的な設定) → AccessRule list への lowering
 * - evaluate(): Session と rules から Granted/Denied を決める純関数
 * - HTTP のことは知らない (redirect/403 へのマッピングは middleware 側)
 */
use crate::domain::session::{CourseId, CourseRole, Session};

/// One authorization rule, evaluated in order; the first failing rule denies.
///
/// Explicit variants instead of a bag of optional flags so each check is
/// testable on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessRule {
    /// Only admins pass.
    AdminOnly,
    /// Hirers pass; admins always pass.
    HirerOnly,
    /// The user must hold one of `roles` in the target course.
    ///
    /// - `course: None` means "use the active course resolved per request";
    ///   if no course can be resolved at all, `MissingCoursePolicy` applies.
    /// - `any_course: true` additionally grants when one of `roles` is held
    ///   in *some* course, not necessarily the target one (power user).
    /// - Admins always pass.
    RoleInCourse {
        roles: Vec<CourseRole>,
        course: Option<CourseId>,
        any_course: bool,
    },
}

/// What to do when a `RoleInCourse` rule has no resolvable target course.
///
/// The upstream behavior skips the role check entirely in that case, i.e.
/// grants. That is surprising enough to keep configurable rather than
/// silently "fixing" it; `Allow` reproduces the upstream behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingCoursePolicy {
    #[default]
    Allow,
    Deny,
}

/// Outcome of evaluating the rules against one Session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
}

/// Declarative gate configuration, one per protected route group.
///
/// Builder-style; lowered to an ordered `Vec<AccessRule>` when the router
/// is assembled. An empty requirement still demands a resolved session but
/// imposes no role constraints.
#[derive(Clone, Debug, Default)]
pub struct AccessRequirement {
    pub allowed_roles: Vec<CourseRole>,
    pub course: Option<CourseId>,
    pub admin_only: bool,
    pub hirer_only: bool,
    pub any_course_power_user: bool,
}

impl AccessRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_roles(mut self, roles: impl IntoIterator<Item = CourseRole>) -> Self {
        self.allowed_roles = roles.into_iter().collect();
        self
    }

    /// Pin the role check to a specific course instead of the per-request
    /// active course.
    pub fn course(mut self, course: CourseId) -> Self {
        self.course = Some(course);
        self
    }

    pub fn admin_only(mut self) -> Self {
        self.admin_only = true;
        self
    }

    pub fn hirer_only(mut self) -> Self {
        self.hirer_only = true;
        self
    }

    pub fn any_course_power_user(mut self) -> Self {
        self.any_course_power_user = true;
        self
    }

    /// Lower to the ordered rule list. Order matters: admin-only is checked
    /// before hirer-only, role checks come last.
    pub fn into_rules(self) -> Vec<AccessRule> {
        let mut rules = Vec::new();
        if self.admin_only {
            rules.push(AccessRule::AdminOnly);
        }
        if self.hirer_only {
            rules.push(AccessRule::HirerOnly);
        }
        if !self.allowed_roles.is_empty() {
            rules.push(AccessRule::RoleInCourse {
                roles: self.allowed_roles,
                course: self.course,
                any_course: self.any_course_power_user,
            });
        }
        rules
    }
}

/// Evaluate `rules` in order against `session`; the first failing rule wins.
///
/// `active_course` is the fallback target for `RoleInCourse` rules that do
/// not pin a course themselves (mirrors "explicit course, else the course
/// the request is about").
pub fn evaluate(
    session: &Session,
    rules: &[AccessRule],
    active_course: Option<CourseId>,
    missing_course: MissingCoursePolicy,
) -> AccessDecision {
    for rule in rules {
        match rule {
            AccessRule::AdminOnly => {
                if !session.is_admin {
                    return AccessDecision::Denied;
                }
            }
            AccessRule::HirerOnly => {
                if !session.is_hirer && !session.is_admin {
                    return AccessDecision::Denied;
                }
            }
            AccessRule::RoleInCourse {
                roles,
                course,
                any_course,
            } => {
                if session.is_admin {
                    continue;
                }
                let Some(target) = course.or(active_course) else {
                    match missing_course {
                        MissingCoursePolicy::Allow => continue,
                        MissingCoursePolicy::Deny => return AccessDecision::Denied,
                    }
                };

                let held = session.roles_in_course(target);
                let direct = roles.iter().any(|role| held.contains(role));
                let power_user = *any_course
                    && roles
                        .iter()
                        .any(|role| session.has_role_in_any_course(*role));

                if !direct && !power_user {
                    return AccessDecision::Denied;
                }
            }
        }
    }
    AccessDecision::Granted
}
