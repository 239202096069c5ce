fn main() {
    poifiles_test::repl::execute_with_args();
}
