#[cfg(test)]
mod tests {
    use crate::logic::{try_book_appointment, AppointmentWindow, BookingSettings};
    use crate::service::mock::MockCalendarService;
    use chrono::{Datelike, NaiveDate, Timelike};
    use proptest::prelude::*;
    use std::collections::HashMap;

    // Any calendar day between 1970 and 2200 plus a minute of that day
    fn date_and_time() -> impl Strategy<Value = (String, String)> {
        (0i64..84_000, 0u32..24, 0u32..60).prop_map(|(days, hour, minute)| {
            let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(days);
            (
                date.format("%Y-%m-%d").to_string(),
                format!("{hour:02}:{minute:02}"),
            )
        })
    }

    fn form_data(name: &str, subject: &str, message: &str, date: &str, time: &str) -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), name.to_string()),
            ("email".to_string(), "jane@example.com".to_string()),
            ("subject".to_string(), subject.to_string()),
            ("message".to_string(), message.to_string()),
            ("eventDate".to_string(), date.to_string()),
            ("eventTime".to_string(), time.to_string()),
        ])
    }

    proptest! {
        // Test that every window lasts exactly one hour
        #[test]
        fn test_window_is_exactly_one_hour((date, time) in date_and_time()) {
            let window = AppointmentWindow::parse(&date, &time).unwrap();

            prop_assert_eq!((window.end - window.start).num_seconds(), 3600);
            prop_assert_eq!(window.start.format("%Y-%m-%d").to_string(), date);
            prop_assert_eq!(window.start.format("%H:%M").to_string(), time);
        }

        // Test that the end crosses into the next day only for starts after 23:00
        #[test]
        fn test_end_day_follows_start_hour((date, time) in date_and_time()) {
            let window = AppointmentWindow::parse(&date, &time).unwrap();

            let next_day = window.end.date_naive() != window.start.date_naive();
            prop_assert_eq!(next_day, window.start.hour() == 23);
            if next_day {
                prop_assert_eq!(window.end.date_naive(), window.start.date_naive().succ_opt().unwrap());
                prop_assert!(window.end.day() == 1 || window.end.day() == window.start.day() + 1);
            }
        }

        // Test that valid inputs always book with a non-empty id
        #[test]
        fn test_valid_inputs_always_book(
            name in "[A-Za-z]{2,20}",
            subject in "[A-Za-z ]{5,40}",
            message in "[A-Za-z .,]{10,80}",
            (date, time) in date_and_time(),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let service = MockCalendarService::new();
            let data = form_data(&name, &subject, &message, &date, &time);

            let booked = runtime
                .block_on(try_book_appointment(&service, &BookingSettings::default(), &data))
                .unwrap();

            prop_assert!(!booked.event_id.is_empty());
            prop_assert_eq!(service.calls(), 1);
        }

        // Test that a too short name never books
        #[test]
        fn test_short_name_never_books(name in "[A-Za-z]{0,1}", (date, time) in date_and_time()) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let service = MockCalendarService::new();
            let data = form_data(&name, "Consultation request", "I would like to talk.", &date, &time);

            let result = runtime.block_on(try_book_appointment(&service, &BookingSettings::default(), &data));

            prop_assert!(result.is_err());
            prop_assert_eq!(service.calls(), 0);
        }
    }
}
