use tracing::info;

use crate::error::{BookingError, Result};
use crate::message::format_booking_message;
use crate::models::{
    BookingFormState, CustomSelection, FinalSelection, FormField, MenuItem, PackageId, Quote,
};
use crate::pricing::{
    build_selection, compute_quote, parse_pax_lenient, validate_submission, MenuChoice,
    PricingRules, ValidatedBooking,
};

/// Which part of the booking flow the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Packages,
    Customize,
    Booking,
}

/// State transitions of a booking session.
#[derive(Debug, Clone)]
pub enum Action {
    GoTo(Step),
    SelectPackage(PackageId),
    ToggleItem(MenuItem),
    ContinueToBooking,
    UpdateForm(FormField, String),
    StartNewBooking,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub booking: ValidatedBooking,
    pub quote: Quote,
    pub message: String,
}

/// All mutable state of one booking flow.
///
/// Changes only through [`BookingSession::apply`] and [`BookingSession::submit`];
/// quotes are derived on demand.
#[derive(Debug, Clone)]
pub struct BookingSession {
    step: Step,
    selected_package: PackageId,
    custom: CustomSelection,
    final_selection: FinalSelection,
    form: BookingFormState,
    submitted: bool,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(BookingFormState::default())
    }
}

impl BookingSession {
    /// Start a session, resuming a previously saved form.
    pub fn new(form: BookingFormState) -> Self {
        Self {
            step: Step::Packages,
            selected_package: PackageId::Aed65,
            custom: CustomSelection::new(),
            final_selection: FinalSelection::None,
            form,
            submitted: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selected_package(&self) -> PackageId {
        self.selected_package
    }

    pub fn custom(&self) -> &CustomSelection {
        &self.custom
    }

    pub fn final_selection(&self) -> &FinalSelection {
        &self.final_selection
    }

    pub fn form(&self) -> &BookingFormState {
        &self.form
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Apply one transition. On error the session is left unchanged.
    pub fn apply(&mut self, action: Action, rules: &PricingRules) -> Result<()> {
        match action {
            Action::GoTo(step) => {
                self.step = step;
            }
            Action::SelectPackage(id) => {
                self.selected_package = id;
            }
            Action::ToggleItem(item) => {
                self.custom.toggle(item);
            }
            Action::ContinueToBooking => {
                // Customize builds from the picks; otherwise the chosen package
                let choice = match self.step {
                    Step::Customize => MenuChoice::Custom(&self.custom),
                    Step::Packages | Step::Booking => MenuChoice::Package(self.selected_package),
                };
                self.final_selection = build_selection(choice, rules)?;
                self.step = Step::Booking;
                info!(menu = ?self.final_selection.title(), "continuing to booking");
            }
            Action::UpdateForm(field, value) => {
                self.form.set(field, value);
            }
            Action::StartNewBooking => {
                self.form = BookingFormState::default();
                self.final_selection = FinalSelection::None;
                self.submitted = false;
                info!("started new booking");
            }
        }
        Ok(())
    }

    /// Live quote for the current selection and form contents.
    pub fn quote(&self, rules: &PricingRules) -> Quote {
        let per_pax_price = self.final_selection.per_pax_price().unwrap_or(0.0);
        let pax = parse_pax_lenient(&self.form.pax);
        let duration = self.form.window().duration_hours();
        compute_quote(rules, per_pax_price, pax, duration)
    }

    /// Validate the form and produce the booking message.
    pub fn submit(&mut self, rules: &PricingRules) -> Result<Submission> {
        if self.final_selection.is_none() {
            return Err(BookingError::NoSelection);
        }

        // Gate first; nothing below runs on invalid input
        let booking = validate_submission(&self.form, rules)?;
        let quote = self.quote(rules);
        let message =
            format_booking_message(&self.final_selection, &self.form, booking.pax, &quote, rules)?;

        self.submitted = true;
        info!(
            pax = booking.pax,
            total = quote.final_total,
            "booking request generated"
        );

        Ok(Submission {
            booking,
            quote,
            message,
        })
    }
}
