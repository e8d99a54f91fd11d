fn main() {
    // Only the firmware build needs the ESP-IDF environment; host tests skip it.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
