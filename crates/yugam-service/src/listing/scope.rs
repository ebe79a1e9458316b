//! Which events and workshops a page may show.

use yugam_entity::{ItemKind, ProgramItem};

use crate::context::RequestContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Everything the remote API returns.
    All,
    /// Items created by this user.
    CreatedBy(String),
    /// Items whose coordinator is this user.
    CoordinatedBy(String),
}

impl Scope {
    /// Team-lead pages: own items, or everything for admins.
    pub fn created_by(ctx: &RequestContext) -> Self {
        if ctx.is_admin() {
            Self::All
        } else {
            Self::CreatedBy(ctx.user_id.clone())
        }
    }

    /// Coordinator pages: strictly the items coordinated by the user.
    pub fn coordinated_by(ctx: &RequestContext) -> Self {
        Self::CoordinatedBy(ctx.user_id.clone())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn admits<T: ProgramItem>(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::CreatedBy(user_id) => item.is_created_by(user_id),
            Self::CoordinatedBy(user_id) => item.is_coordinated_by(user_id),
        }
    }

    /// Keep the admitted items, preserving order.
    pub fn retain<T: ProgramItem>(&self, items: Vec<T>) -> Vec<T> {
        if self.is_all() {
            return items;
        }
        items.into_iter().filter(|item| self.admits(item)).collect()
    }
}

/// Which budgets or expenses a finance table shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerScope {
    /// Every record the remote API returns.
    All,
    /// Records attached to an item of this kind admitted by the scope.
    Attached(ItemKind, Scope),
}

impl LedgerScope {
    /// Records attached to items of `kind` in `scope`. An unrestricted
    /// scope needs no item lookup, so it collapses to [`LedgerScope::All`].
    pub fn attached(kind: ItemKind, scope: Scope) -> Self {
        if scope.is_all() {
            Self::All
        } else {
            Self::Attached(kind, scope)
        }
    }
}
