#![no_main]

use libfuzzer_sys::fuzz_target;
use ziffern::{DecimalFormatter, DecimalParser, DisplayPolicy, Separators};

fuzz_target!(|data: (i64, u32)| {
    let (mantissa, scale) = data;
    let value = rust_decimal::Decimal::new(mantissa, scale % 7);

    let fmt = DecimalFormatter::new(6, DisplayPolicy::AlwaysShowDecimals)
        .separators(Separators::german());
    let parser = DecimalParser::new().separators(Separators::german());

    let text = fmt.format(value).unwrap();
    assert_eq!(parser.parse(&text).unwrap(), value);
});
