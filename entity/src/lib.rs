pub mod user;
pub mod expertise_area;
pub mod user_expertise_area;
pub mod mentorship;
pub mod mentorship_focus_area;

/*
 New speakers browse experienced speakers and request mentorship.
 A request starts Pending; only the mentor can accept (-> Active) or
 decline (-> Declined). Either party can cancel an open record, and an
 Active mentorship can be completed. Terminal rows are kept, never
 deleted, so both speakers keep their history.
*/
