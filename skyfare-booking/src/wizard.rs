use crate::extras::{baggage_total, seat_total, BaggageChoice, SeatChoice};
use crate::orchestrator::{BookingOrchestrator, BookingOutcome};
use crate::pricing::{FeeSchedule, PriceSummary};
use skyfare_core::offer::OfferSummary;
use skyfare_core::payment::PaymentSession;
use skyfare_core::supplier::{OrderConfirmation, OrderRequest};
use skyfare_core::traveler::{TravelerDetails, TravelerField};

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Details,
    Extras,
    TravelerInfo,
    Confirmation,
}

impl WizardStep {
    /// 1-based position for the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Extras => 2,
            WizardStep::TravelerInfo => 3,
            WizardStep::Confirmation => 4,
        }
    }

    fn forward(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => Some(WizardStep::Extras),
            WizardStep::Extras => Some(WizardStep::TravelerInfo),
            // TravelerInfo advances only through a successful submission
            WizardStep::TravelerInfo | WizardStep::Confirmation => None,
        }
    }

    fn backward(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => None,
            WizardStep::Extras => Some(WizardStep::Details),
            WizardStep::TravelerInfo => Some(WizardStep::Extras),
            WizardStep::Confirmation => Some(WizardStep::TravelerInfo),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("missing traveler information: {}", format_fields(.0))]
    IncompleteTraveler(Vec<TravelerField>),
    #[error("a booking request is already in progress")]
    SubmitInFlight,
    #[error("booking can only be submitted from the traveler info step")]
    NotOnTravelerStep,
    #[error("booking failed, please try again: {0}")]
    BookingFailed(String),
}

fn format_fields(fields: &[TravelerField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Four-step booking flow entered with a selected offer. Back-navigation
/// never discards entered data; the confirmation step is reached only
/// through a successful external booking call, guarded against repeat
/// submission by an in-flight latch.
#[derive(Debug)]
pub struct BookingWizard {
    step: WizardStep,
    offer: OfferSummary,
    fees: FeeSchedule,
    price: PriceSummary,
    seats: Vec<SeatChoice>,
    baggage: Vec<BaggageChoice>,
    traveler: TravelerDetails,
    submit_in_flight: bool,
    confirmation: Option<OrderConfirmation>,
    payment: Option<PaymentSession>,
}

impl BookingWizard {
    /// Enter the wizard with the offer chosen on the results page
    pub fn new(offer: OfferSummary, fees: FeeSchedule) -> Self {
        let price = PriceSummary::new(offer.total.amount_minor, &offer.total.currency, &fees);
        Self {
            step: WizardStep::Details,
            offer,
            fees,
            price,
            seats: Vec::new(),
            baggage: Vec::new(),
            traveler: TravelerDetails::default(),
            submit_in_flight: false,
            confirmation: None,
            payment: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn offer(&self) -> &OfferSummary {
        &self.offer
    }

    pub fn price(&self) -> &PriceSummary {
        &self.price
    }

    pub fn seats(&self) -> &[SeatChoice] {
        &self.seats
    }

    pub fn baggage(&self) -> &[BaggageChoice] {
        &self.baggage
    }

    pub fn traveler(&self) -> &TravelerDetails {
        &self.traveler
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn payment(&self) -> Option<&PaymentSession> {
        self.payment.as_ref()
    }

    /// Move forward one step. No-op on the traveler step (submission is the
    /// only way forward) and on confirmation.
    pub fn next(&mut self) {
        if let Some(step) = self.step.forward() {
            self.step = step;
        }
    }

    /// Move back one step. Always allowed; entered data is kept.
    pub fn back(&mut self) {
        if let Some(step) = self.step.backward() {
            self.step = step;
        }
    }

    /// Replace the base fare (e.g., after picking a different fare brand)
    pub fn set_base_fare(&mut self, base_minor: i64) {
        self.price.set_base(base_minor, &self.fees);
    }

    /// Replace the seat selection and reprice
    pub fn select_seats(&mut self, seats: Vec<SeatChoice>) {
        self.price.seat_minor = seat_total(&seats);
        self.seats = seats;
    }

    /// Replace the baggage selection and reprice
    pub fn select_baggage(&mut self, baggage: Vec<BaggageChoice>) {
        self.price.baggage_minor = baggage_total(&baggage);
        self.baggage = baggage;
    }

    pub fn set_traveler(&mut self, traveler: TravelerDetails) {
        self.traveler = traveler;
    }

    pub fn traveler_mut(&mut self) -> &mut TravelerDetails {
        &mut self.traveler
    }

    /// First phase of submission: validate, latch, and produce the order
    /// request for the external call. A second call while latched is
    /// rejected, so rapid repeat confirms yield exactly one request.
    pub fn begin_submit(&mut self) -> Result<OrderRequest, WizardError> {
        if self.step != WizardStep::TravelerInfo {
            return Err(WizardError::NotOnTravelerStep);
        }
        if self.submit_in_flight {
            return Err(WizardError::SubmitInFlight);
        }

        let missing = self.traveler.missing_fields();
        if !missing.is_empty() {
            return Err(WizardError::IncompleteTraveler(missing));
        }

        self.submit_in_flight = true;
        Ok(OrderRequest {
            offer_id: self.offer.id.clone(),
            traveler: self.traveler.clone(),
            total_minor: self.price.total_minor(),
            currency: self.price.currency.clone(),
            extras: serde_json::json!({
                "seats": self.seats,
                "baggage": self.baggage,
            }),
        })
    }

    /// Second phase: apply the outcome of the external call. Success moves
    /// to confirmation; failure clears the latch and leaves every entered
    /// value on the traveler step for a manual retry.
    pub fn resolve_submit(
        &mut self,
        outcome: Result<BookingOutcome, Box<dyn std::error::Error + Send + Sync>>,
    ) -> Result<&OrderConfirmation, WizardError> {
        self.submit_in_flight = false;
        match outcome {
            Ok(result) => {
                tracing::info!(
                    reference = %result.confirmation.booking_reference,
                    "booking confirmed"
                );
                self.payment = Some(result.payment);
                self.step = WizardStep::Confirmation;
                Ok(self.confirmation.insert(result.confirmation))
            }
            Err(err) => {
                tracing::warn!(error = %err, "booking submission failed");
                Err(WizardError::BookingFailed(err.to_string()))
            }
        }
    }

    /// Convenience wrapper composing both phases around the orchestrator
    pub async fn submit(
        &mut self,
        orchestrator: &BookingOrchestrator,
    ) -> Result<&OrderConfirmation, WizardError> {
        let request = self.begin_submit()?;
        let outcome = orchestrator.place_booking(&request).await;
        self.resolve_submit(outcome)
    }
}
