//! View state of the ticket board.
//!
//! The board owns the ticket collection plus the two pieces of user state
//! (stop selection, display currency). Each event replaces that state with a
//! new value. The visible list is cached and only recomputed when the tickets
//! or the stop selection actually change.

use crate::core::filter::{filter_indices, StopAction, StopFlag, StopFlags, StopSelection};
use crate::core::labels::StopLabels;
use crate::core::pricing::{format_price, Currency, RateTable};
use crate::domain::model::Ticket;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    SelectAllStops,
    ToggleStop(StopFlag),
    SelectCurrency(Currency),
    ReplaceTickets(Vec<Ticket>),
}

/// One visible ticket as it is shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct TicketRow<'a> {
    #[serde(flatten)]
    pub ticket: &'a Ticket,
    pub display_price: String,
    pub currency: Currency,
    pub stop_label: String,
}

#[derive(Debug, Clone)]
pub struct TicketBoard {
    tickets: Vec<Ticket>,
    selection: StopSelection,
    currency: Currency,
    rates: RateTable,
    visible: Vec<usize>,
    recomputations: usize,
}

impl TicketBoard {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self::with_rates(tickets, RateTable::standard())
    }

    pub fn with_rates(tickets: Vec<Ticket>, rates: RateTable) -> Self {
        let mut board = Self {
            tickets,
            selection: StopSelection::default(),
            currency: Currency::default(),
            rates,
            visible: Vec::new(),
            recomputations: 0,
        };
        board.recompute();
        board
    }

    fn recompute(&mut self) {
        self.visible = filter_indices(&self.tickets, &self.selection);
        self.recomputations += 1;
        tracing::debug!(
            "Filter '{}' keeps {} of {} tickets",
            self.selection,
            self.visible.len(),
            self.tickets.len()
        );
    }

    /// Applies a user event. Returns `true` when observable state changed.
    pub fn dispatch(&mut self, event: BoardEvent) -> bool {
        match event {
            BoardEvent::SelectAllStops => self.apply_stop_action(StopAction::SelectAll),
            BoardEvent::ToggleStop(flag) => self.apply_stop_action(StopAction::Toggle(flag)),
            BoardEvent::SelectCurrency(currency) => {
                if currency == self.currency {
                    return false;
                }
                tracing::debug!("Currency {} -> {}", self.currency, currency);
                self.currency = currency;
                true
            }
            BoardEvent::ReplaceTickets(tickets) => {
                if tickets == self.tickets {
                    return false;
                }
                self.tickets = tickets;
                self.recompute();
                true
            }
        }
    }

    fn apply_stop_action(&mut self, action: StopAction) -> bool {
        let next = self.selection.apply(action);
        if next == self.selection {
            return false;
        }
        self.selection = next;
        self.recompute();
        true
    }

    pub fn select_all_stops(&mut self) -> bool {
        self.dispatch(BoardEvent::SelectAllStops)
    }

    pub fn toggle_stop_filter(&mut self, flag: StopFlag) -> bool {
        self.dispatch(BoardEvent::ToggleStop(flag))
    }

    pub fn select_currency(&mut self, currency: Currency) -> bool {
        self.dispatch(BoardEvent::SelectCurrency(currency))
    }

    /// Replaces the selection wholesale, e.g. from start-up configuration.
    pub fn set_selection(&mut self, selection: StopSelection) -> bool {
        if selection == self.selection {
            return false;
        }
        self.selection = selection;
        self.recompute();
        true
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn selection(&self) -> &StopSelection {
        &self.selection
    }

    pub fn flags(&self) -> StopFlags {
        self.selection.flags()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// How many times the visible list has been rebuilt.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn visible(&self) -> impl Iterator<Item = &Ticket> + '_ {
        self.visible.iter().map(move |&index| &self.tickets[index])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn display_price(&self, ticket: &Ticket) -> String {
        format_price(ticket.price, self.currency.code(), &self.rates)
    }

    pub fn rows<'a>(&'a self, labels: &dyn StopLabels) -> Vec<TicketRow<'a>> {
        self.visible()
            .map(|ticket| TicketRow {
                ticket,
                display_price: self.display_price(ticket),
                currency: self.currency,
                stop_label: labels.label(ticket.stops),
            })
            .collect()
    }
}
