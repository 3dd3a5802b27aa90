use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    ada_cestas::report_app::run_dashboard_report(std::env::args().skip(1))
}
