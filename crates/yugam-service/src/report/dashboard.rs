//! Role dashboards served at `/`.

use serde::Serialize;

use yugam_client::PortalClient;
use yugam_entity::{ItemKind, Role};

use super::snapshot::{Needs, Snapshot, StatusCounts};
use crate::context::RequestContext;
use crate::listing::Scope;
use crate::view::{BudgetSummary, ItemRow, Toast, Toasts};

const RECENT_ITEMS: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub role: Role,
    pub heading: &'static str,
    pub counts: StatusCounts,
    pub summary: BudgetSummary,
    pub pending_budgets: usize,
    pub recent: Vec<ItemRow>,
    pub toasts: Vec<Toast>,
}

/// What a role's dashboard covers.
struct Layout {
    heading: &'static str,
    kinds: &'static [ItemKind],
    scope: Scope,
}

const BOTH: &[ItemKind] = &[ItemKind::Event, ItemKind::Workshop];

fn layout(ctx: &RequestContext) -> Layout {
    match ctx.role {
        Role::Admin => Layout {
            heading: "Admin Dashboard",
            kinds: BOTH,
            scope: Scope::All,
        },
        Role::EventTeamLead => Layout {
            heading: "Event Lead Dashboard",
            kinds: &[ItemKind::Event],
            scope: Scope::created_by(ctx),
        },
        Role::WorkshopTeamLead => Layout {
            heading: "Workshop Lead Dashboard",
            kinds: &[ItemKind::Workshop],
            scope: Scope::created_by(ctx),
        },
        Role::FinanceTeam => Layout {
            heading: "Finance Dashboard",
            kinds: BOTH,
            scope: Scope::All,
        },
        Role::FacilitiesTeam => Layout {
            heading: "Facilities Dashboard",
            kinds: &[ItemKind::Event],
            scope: Scope::All,
        },
        // Both coordinator roles share one dashboard.
        Role::EventCoordinator | Role::WorkshopCoordinator => Layout {
            heading: "Coordinator Dashboard",
            kinds: BOTH,
            scope: Scope::coordinated_by(ctx),
        },
    }
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    client: PortalClient,
}

impl DashboardService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    pub async fn dashboard(&self, ctx: &RequestContext) -> DashboardView {
        let layout = layout(ctx);
        let api = ctx.api(&self.client);
        let mut toasts = Toasts::new();

        let snapshot = Snapshot::load(&api, Needs::kinds(layout.kinds), &mut toasts)
            .await
            .scoped(&layout.scope);

        DashboardView {
            role: ctx.role,
            heading: layout.heading,
            counts: snapshot.status_counts(),
            summary: snapshot.summary(),
            pending_budgets: snapshot.pending_budgets(),
            recent: snapshot.recent_rows(RECENT_ITEMS),
            toasts: toasts.into_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yugam_entity::UserRef;

    fn ctx(role: Role) -> RequestContext {
        RequestContext::new(
            UserRef {
                id: "u".into(),
                name: String::new(),
                email: String::new(),
            },
            role,
            "t",
        )
    }

    #[test]
    fn test_every_role_has_a_layout() {
        for role in Role::ALL {
            let layout = layout(&ctx(role));
            assert!(!layout.kinds.is_empty());
            assert!(layout.heading.ends_with("Dashboard"));
        }
    }

    #[test]
    fn test_coordinators_share_scope() {
        let a = layout(&ctx(Role::EventCoordinator));
        let b = layout(&ctx(Role::WorkshopCoordinator));
        assert_eq!(a.heading, b.heading);
        assert_eq!(a.scope, Scope::CoordinatedBy("u".into()));
        assert_eq!(b.scope, a.scope);
    }

    #[test]
    fn test_lead_dashboards_are_own_items_only() {
        let layout = layout(&ctx(Role::EventTeamLead));
        assert_eq!(layout.scope, Scope::CreatedBy("u".into()));
        assert_eq!(layout.kinds, &[ItemKind::Event]);
    }
}
