#[cfg(test)]
mod tests {
    use crate::handlers::GcalState;
    use crate::logic::BookingSettings;
    use crate::routes::routes;
    use crate::service::mock::{MockBehavior, MockCalendarService};
    use crate::service::GcalServiceError;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use contactbook_common::BookingOutcome;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts events at INFO or more severe.
    struct CountEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() <= Level::INFO {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    const JANE_DOE_FORM: &str = "name=Jane+Doe&email=jane%40example.com&subject=Consultation+request\
        &message=I+would+like+to+discuss+pricing+options.&eventDate=2024-06-01&eventTime=14%3A00";

    fn app_with(calendar: Arc<MockCalendarService>) -> Router {
        let state = GcalState::with_calendar(BookingSettings::default(), calendar);
        routes(Arc::new(state))
    }

    async fn post(app: Router, uri: &str, content_type: &str, body: &str) -> (StatusCode, BookingOutcome) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_form_booking_succeeds() {
        let calendar = Arc::new(MockCalendarService::new());

        let (status, outcome) = post(
            app_with(calendar.clone()),
            "/book",
            "application/x-www-form-urlencoded",
            JANE_DOE_FORM,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(outcome.success);
        assert_eq!(outcome.message, "Appointment booked successfully!");
        assert_eq!(outcome.event_id.as_deref(), Some(calendar.created()[0].1.as_str()));
    }

    #[tokio::test]
    async fn test_json_booking_succeeds() {
        let calendar = Arc::new(MockCalendarService::new());
        let body = serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Consultation request",
            "message": "I would like to discuss pricing options.",
            "eventDate": "2024-06-01",
            "eventTime": "14:00"
        });

        let (status, outcome) = post(
            app_with(calendar.clone()),
            "/gcal/book",
            "application/json",
            &body.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(outcome.success);
        assert_eq!(calendar.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_answers_generic_failure() {
        let calendar = Arc::new(MockCalendarService::new());
        let body = JANE_DOE_FORM.replace("name=Jane+Doe", "name=J");

        let (status, outcome) = post(
            app_with(calendar.clone()),
            "/book",
            "application/x-www-form-urlencoded",
            &body,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome, BookingOutcome::failed());
        assert_eq!(calendar.calls(), 0);
    }

    #[tokio::test]
    async fn test_unreadable_body_answers_generic_failure() {
        let calendar = Arc::new(MockCalendarService::new());

        let (status, outcome) = post(
            app_with(calendar.clone()),
            "/gcal/book",
            "application/json",
            "{not json",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome, BookingOutcome::failed());
        assert_eq!(calendar.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_answers_generic_failure() {
        let calendar = Arc::new(MockCalendarService::with_behavior(MockBehavior::Fail(|| {
            GcalServiceError::Authentication("invalid_grant".to_string())
        })));

        let (status, outcome) = post(
            app_with(calendar),
            "/book",
            "application/x-www-form-urlencoded",
            JANE_DOE_FORM,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome.message, "Failed to book appointment. Please try again.");
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_unreadable_body_logs_one_line() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountEvents(count.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let (_, outcome) = post(
            app_with(Arc::new(MockCalendarService::new())),
            "/gcal/book",
            "application/json",
            "[1, 2",
        )
        .await;

        assert!(!outcome.success);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
