fn main() {
    embediq::start();
}
