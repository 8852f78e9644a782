fn main() {
    // Propagate ESP-IDF link settings only for on-target builds; host
    // test builds (--no-default-features) have no IDF environment.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
