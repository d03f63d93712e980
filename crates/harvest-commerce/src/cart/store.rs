//! The cart store: one session's cart state plus change listeners.

use std::fmt;
use std::sync::Arc;

use crate::cart::{apply, CartAction, CartState};
use crate::catalog::Product;
use crate::ids::{ListenerId, ProductId};
use crate::money::Currency;

/// Callback run after every dispatch that changed the cart.
pub type Listener = Box<dyn Fn(&Arc<CartState>) + Send + Sync>;

/// Owns the session's [`CartState`].
///
/// Create one at application start and hand it (or a handle to it) to every
/// view that needs the cart. Readers get immutable snapshots; every change
/// goes through [`CartStore::dispatch`].
pub struct CartStore {
    state: Arc<CartState>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl CartStore {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            state: Arc::new(CartState::empty(currency)),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current state as a shared snapshot.
    pub fn snapshot(&self) -> Arc<CartState> {
        Arc::clone(&self.state)
    }

    /// Borrow the current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply an action. Returns `true` when the state changed.
    pub fn dispatch(&mut self, action: CartAction) -> bool {
        let next = apply(&self.state, &action);
        if Arc::ptr_eq(&next, &self.state) {
            tracing::trace!(action = action.kind(), "cart unchanged");
            return false;
        }

        self.state = next;
        tracing::debug!(
            action = action.kind(),
            product_id = ?action.product_id(),
            lines = self.state.line_count(),
            total_items = self.state.total_items,
            total_price = %self.state.total_price,
            "cart updated"
        );

        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
        true
    }

    pub fn add_item(&mut self, product: &Product) -> bool {
        self.dispatch(CartAction::AddItem(product.clone()))
    }

    /// Add `count` units by dispatching one add per unit.
    ///
    /// Returns `true` if any unit was added.
    pub fn add_many(&mut self, product: &Product, count: u32) -> bool {
        let mut changed = false;
        for _ in 0..count {
            changed |= self.add_item(product);
        }
        changed
    }

    pub fn remove_item(&mut self, id: ProductId) -> bool {
        self.dispatch(CartAction::RemoveItem(id))
    }

    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        self.dispatch(CartAction::UpdateQuantity { id, quantity })
    }

    pub fn clear(&mut self) -> bool {
        self.dispatch(CartAction::ClearCart)
    }

    /// Register a listener; it runs after each state-changing dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&Arc<CartState>) + Send + Sync + 'static,
    {
        let id = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() < len_before
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
