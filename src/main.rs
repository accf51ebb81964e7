use std::io;
use std::path::Path;

use cowriter::app::Application;
use cowriter::config::Settings;
use cowriter::logging;

fn main() -> io::Result<()> {
    let settings = Settings::load_or_default(Path::new("cowriter.json"));
    let _logging = logging::init(&settings.log_level);

    let app = Application::new(settings);
    app.run()
}
