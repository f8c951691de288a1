use xmcda_xml::builder::{Attribute, Builder, Declaration, Element, Namespace};

const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

pub fn main() {
    let payload = Element::new("submitProblem")
        .add_namespace_declaration("http://www.w3.org/2001/XMLSchema", Some("xsd"))
        .add_namespace_declaration(XSI, Some("xsi"))
        .add_child(
            Element::new("overallValues")
                .add_attribute(Attribute::new("type", "xsd:string").set_namespace(Namespace::new(XSI)))
                .set_text("<xmcda:XMCDA><alternativesValues/></xmcda:XMCDA>"),
        );

    let builder = Builder::new(Some(Declaration::new("1.0", "utf-8")), payload);
    println!(
        "{}",
        builder.to_xml_string().expect("writing to a Vec cannot fail")
    );
}
