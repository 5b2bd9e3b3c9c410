use std::cell::RefCell;

use super::*;

#[test]
fn go_to_login_navigates_to_login_route() {
    let visited = RefCell::new(Vec::<String>::new());
    let navigate = |path: &str, _opts: NavigateOptions| visited.borrow_mut().push(path.to_owned());

    go_to_login(&navigate);

    assert_eq!(*visited.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn go_to_login_uses_default_navigation_options() {
    let replaced = RefCell::new(None::<bool>);
    let navigate = |_: &str, opts: NavigateOptions| *replaced.borrow_mut() = Some(opts.replace);

    go_to_login(&navigate);

    assert_eq!(*replaced.borrow(), Some(false));
}
