/// Identification of a panel's use case.
pub trait UseCaseMetadata {
    /// Index of the use case (e.g. "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "connect_database")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u601_connect_database"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
