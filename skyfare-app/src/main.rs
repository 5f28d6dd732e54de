mod app_config;

use anyhow::{anyhow, Context};
use chrono::{Duration, Utc};
use skyfare_booking::orchestrator::{MockGateway, MockSupplier};
use skyfare_booking::{BookingOrchestrator, BookingWizard, FeeSchedule};
use skyfare_core::money::format_minor;
use skyfare_search::airports::AirportPicker;
use skyfare_search::dates::DateRangePicker;
use skyfare_search::passengers::{PassengerSelector, TravelerCategory};
use skyfare_search::SearchBar;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scripted demo: assemble a query through the widgets, search offers with
/// the mock supplier, and walk the wizard through to a confirmed booking.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyfare=info,skyfare_search=info,skyfare_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::Config::load().context("Failed to load config")?;
    tracing::info!(
        fee_rate = config.business_rules.booking_fee_rate,
        supplier = %config.supplier.name,
        "starting skyfare demo"
    );

    let supplier = Arc::new(MockSupplier::default());
    let orchestrator = BookingOrchestrator::new(supplier.clone(), Arc::new(MockGateway));

    // Assemble the query through the search bar and its widgets
    let mut bar = SearchBar::new();

    let mut picker = AirportPicker::new();
    picker.search(supplier.as_ref(), "new york").await;
    let origin = picker.select(0).ok_or_else(|| anyhow!("no origin match"))?;
    bar.set_origin(origin);

    picker.search(supplier.as_ref(), "london").await;
    let destination = picker.select(0).ok_or_else(|| anyhow!("no destination match"))?;
    bar.set_destination(destination);

    let today = Utc::now().date_naive();
    let mut dates = DateRangePicker::open(bar.date_seed(), today);
    dates.set_return_enabled(true);
    dates.select(today + Duration::days(30));
    dates.select(today + Duration::days(37));
    let selection = dates
        .finish()
        .ok_or_else(|| anyhow!("date selection incomplete"))?;
    bar.commit_dates(selection);

    let mut passengers = PassengerSelector::with_max(
        bar.query().passengers,
        bar.query().cabin_class,
        config.business_rules.max_travelers_per_category,
    );
    passengers.increment(TravelerCategory::Adults);
    let (counts, cabin) = passengers.apply();
    bar.commit_passengers(counts, cabin);

    let query = bar.submit().map_err(|e| anyhow!(e.to_string()))?;

    // Search and pick the first offer
    let offers = orchestrator.search_offers(&query).await?;
    bar.search_finished();
    let offer = offers
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no offers returned"))?;
    tracing::info!(offer_id = %offer.id, total = %offer.total, "offer selected");

    // Walk the wizard
    let fees = FeeSchedule::new(config.business_rules.booking_fee_rate);
    let mut wizard = BookingWizard::new(offer, fees);
    wizard.next(); // details -> extras
    wizard.select_seats(vec![skyfare_booking::extras::SeatChoice {
        designator: "12A".to_string(),
        price_minor: 2500,
    }]);
    wizard.next(); // extras -> traveler info

    let traveler = wizard.traveler_mut();
    traveler.first_name = "Jane".to_string();
    traveler.last_name = "Doe".to_string();
    traveler.date_of_birth = chrono::NaiveDate::from_ymd_opt(1990, 4, 2);
    traveler.email = "jane@example.com".to_string();
    traveler.phone = "+1 555 123 4567".to_string();

    let confirmation = wizard
        .submit(&orchestrator)
        .await
        .map_err(|e| anyhow!(e.to_string()))?;
    let reference = confirmation.booking_reference.clone();

    tracing::info!(
        reference = %reference,
        total = %format_minor(wizard.price().total_minor()),
        payment_url = %wizard
            .payment()
            .map(|p| p.url.as_str())
            .unwrap_or("<none>"),
        "booking complete"
    );

    Ok(())
}
