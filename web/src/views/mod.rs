mod components;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod incidents;
pub use incidents::Incidents;

mod nav;
pub use nav::NavigationBar;

mod sections;
pub use sections::{Companies, Employees, Offices, Periods, Users};
