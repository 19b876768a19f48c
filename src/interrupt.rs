/// Makes Ctrl-C print a short notice and exit with status 0.
#[cfg(unix)]
pub fn install() {
    extern "C" fn on_interrupt(_: libc::c_int) {
        const MSG: &[u8] = b"Exiting...\n";
        // Only async-signal-safe calls here.
        unsafe {
            libc::write(libc::STDOUT_FILENO, MSG.as_ptr().cast(), MSG.len());
            libc::_exit(0);
        }
    }

    unsafe {
        libc::signal(
            libc::SIGINT,
            on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t,
        );
    }
}

#[cfg(not(unix))]
pub fn install() {}
