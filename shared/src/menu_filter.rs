//! Menu and provider list filtering
//!
//! Pure filters over lists already fetched in full from the backend.

use chrono::{NaiveDate, Utc};

use crate::models::{Menu, Provider};

/// Calendar day of a menu date string
///
/// Only the part before `T` is read, so time of day and offset are ignored.
pub fn menu_day(date: &str) -> Option<NaiveDate> {
    let day = date.split('T').next()?;
    NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d").ok()
}

/// Today's calendar day in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whether a menu is orderable on `day`
pub fn is_available_on(menu: &Menu, day: NaiveDate) -> bool {
    if menu.is_withdrawn() {
        return false;
    }
    menu.date.as_deref().and_then(menu_day) == Some(day)
}

/// Menus available on `today`, keeping input order
pub fn todays_menus(menus: &[Menu], today: NaiveDate) -> Vec<Menu> {
    menus
        .iter()
        .filter(|m| is_available_on(m, today))
        .cloned()
        .collect()
}

/// [`todays_menus`] for the current UTC day
pub fn todays_menus_utc(menus: &[Menu]) -> Vec<Menu> {
    todays_menus(menus, today_utc())
}

/// Menus owned by a provider, matching plain or populated provider references
pub fn menus_for_provider(menus: &[Menu], provider_id: &str) -> Vec<Menu> {
    menus
        .iter()
        .filter(|m| m.provider_id.id() == provider_id)
        .cloned()
        .collect()
}

/// Case-insensitive search on provider name or email; blank query keeps all
pub fn search_providers<'a>(providers: &'a [Provider], query: &str) -> Vec<&'a Provider> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return providers.iter().collect();
    }
    providers
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.email.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceTable, UserRef, UserSummary};

    fn menu(id: &str, date: Option<&str>) -> Menu {
        Menu {
            id: id.into(),
            provider_id: UserRef::Id("p1".into()),
            date: date.map(str::to_string),
            sabjis: vec!["Paneer".into()],
            prices: PriceTable::new(120.0, 70.0, 40.0),
            created_at: None,
            updated_at: None,
            is_active: None,
            deleted_at: None,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_menu_day_ignores_time_and_offset() {
        assert_eq!(menu_day("2026-10-18T23:59:59+05:30"), Some(day("2026-10-18")));
        assert_eq!(menu_day("2026-10-18T00:00:00.000Z"), Some(day("2026-10-18")));
        assert_eq!(menu_day("2026-10-18"), Some(day("2026-10-18")));
        assert_eq!(menu_day("18/10/2026"), None);
        assert_eq!(menu_day(""), None);
    }

    #[test]
    fn test_only_today_is_kept() {
        let today = day("2026-10-18");
        let menus = vec![
            menu("yesterday", Some("2026-10-17T10:00:00.000Z")),
            menu("today", Some("2026-10-18T10:00:00.000Z")),
            menu("tomorrow", Some("2026-10-19T00:00:00.000Z")),
            menu("undated", None),
        ];
        let ids: Vec<_> = todays_menus(&menus, today).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["today"]);
    }

    #[test]
    fn test_withdrawn_menus_excluded() {
        let today = day("2026-10-18");
        let mut inactive = menu("inactive", Some("2026-10-18"));
        inactive.is_active = Some(false);
        let mut deleted = menu("deleted", Some("2026-10-18"));
        deleted.deleted_at = Some("2026-10-18T08:00:00Z".into());
        let mut active = menu("active", Some("2026-10-18"));
        active.is_active = Some(true);

        let kept = todays_menus(&[inactive, deleted, active], today);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "active");
    }

    #[test]
    fn test_menus_for_provider_handles_populated_refs() {
        let mut populated = menu("m2", None);
        populated.provider_id = UserRef::Populated(Box::new(UserSummary {
            id: "p2".into(),
            name: Some("Meera".into()),
            ..Default::default()
        }));
        let menus = vec![menu("m1", None), populated, menu("m3", None)];

        assert_eq!(menus_for_provider(&menus, "p1").len(), 2);
        let p2 = menus_for_provider(&menus, "p2");
        assert_eq!(p2.len(), 1);
        assert_eq!(p2[0].id, "m2");
        assert!(menus_for_provider(&menus, "nobody").is_empty());
    }

    #[test]
    fn test_search_providers() {
        let providers = vec![
            Provider {
                id: "1".into(),
                name: "Annapurna Tiffins".into(),
                email: "hello@annapurna.in".into(),
            },
            Provider {
                id: "2".into(),
                name: "Ghar Ka Khana".into(),
                email: "orders@gkk.in".into(),
            },
        ];
        assert_eq!(search_providers(&providers, "  ").len(), 2);
        assert_eq!(search_providers(&providers, "ANNA")[0].id, "1");
        assert_eq!(search_providers(&providers, "gkk.in")[0].id, "2");
        assert!(search_providers(&providers, "pizza").is_empty());
    }
}
