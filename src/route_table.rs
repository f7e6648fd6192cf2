//! Curated province-to-province routes.
//!
//! Each unordered pair is stored once as `"From-To" => "From → ... → To"`.
//! Lookups in the other direction reverse the stored walk. Entries are
//! validated when the table is built; rejected entries behave as absent.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::error::RouteTableError;
use crate::path::ProvincePath;
use crate::province::Province;
use crate::traits::RouteTableProvider;

/// Stored routes. Only one direction of each pair is kept.
const ROUTES: &[(&str, &str)] = &[
    ("Badakhshan-Balkh", "Badakhshan → Takhar → Kunduz → Balkh"),
    (
        "Badakhshan-Ghazni",
        "Badakhshan → Takhar → Kunduz → Baghlan → Parwan → Maidan Wardak → Ghazni",
    ),
    ("Badakhshan-Herat", "Badakhshan → Takhar → Kunduz → Baghlan → Bamyan → Ghor → Herat"),
    ("Badakhshan-Kabul", "Badakhshan → Takhar → Kunduz → Baghlan → Parwan → Kabul"),
    (
        "Badakhshan-Kandahar",
        "Badakhshan → Takhar → Kunduz → Baghlan → Bamyan → Ghor → Uruzgan → Kandahar",
    ),
    ("Badakhshan-Kunduz", "Badakhshan → Takhar → Kunduz"),
    ("Badakhshan-Nangarhar", "Badakhshan → Takhar → Kunduz → Baghlan → Parwan → Kabul → Nangarhar"),
    (
        "Badakhshan-Nuristan",
        "Badakhshan → Takhar → Kunduz → Baghlan → Parwan → Kabul → Laghman → Kunar → Nuristan",
    ),
    ("Badakhshan-Panjshir", "Badakhshan → Takhar → Kunduz → Baghlan → Parwan → Panjshir"),
    ("Badakhshan-Takhar", "Badakhshan → Takhar"),
    ("Badghis-Baghlan", "Badghis →"),
    ("Badghis-Balkh", "Badghis → Faryab → Jowzjan → Balkh"),
    ("Badghis-Faryab", "Badghis → Faryab"),
    ("Badghis-Ghazni", "Badghis → Ghor → Daykundi → Ghazni"),
    ("Badghis-Ghor", "Badghis → Ghor"),
    ("Badghis-Herat", "Badghis → Herat"),
    ("Badghis-Kabul", "Badghis → Ghor → Bamyan → Parwan → Kabul"),
    ("Badghis-Kandahar", "Badghis → Ghor → Uruzgan → Kandahar"),
    ("Badghis-Kunduz", "Badghis → Faryab → Jowzjan → Balkh → Kunduz"),
    ("Badghis-Nangarhar", "Badghis → Ghor → Bamyan → Parwan → Kabul → Nangarhar"),
    ("Baghlan-Balkh", "Baghlan → Kunduz → Balkh"),
    ("Baghlan-Bamyan", "Baghlan → Bamyan"),
    ("Baghlan-Ghazni", "Baghlan → Parwan → Maidan Wardak → Ghazni"),
    ("Baghlan-Herat", "Baghlan → Bamyan → Ghor → Herat"),
    ("Baghlan-Kabul", "Baghlan → Parwan → Kabul"),
    ("Baghlan-Kandahar", "Baghlan → Bamyan → Ghor → Uruzgan → Kandahar"),
    ("Baghlan-Kunduz", "Baghlan → Kunduz"),
    ("Baghlan-Nangarhar", "Baghlan → Parwan → Kabul → Nangarhar"),
    ("Baghlan-Panjshir", "Baghlan → Parwan → Panjshir"),
    ("Baghlan-Parwan", "Baghlan → Parwan"),
    ("Baghlan-Samangan", "Baghlan → Samangan"),
    ("Baghlan-Takhar", "Baghlan → Kunduz → Takhar"),
    ("Balkh-Bamyan", "Balkh → Samangan → Bamyan"),
    ("Balkh-Daykundi", "Balkh → Samangan → Bamyan → Daykundi"),
    ("Balkh-Farah", "Balkh → Sar-e Pol → Ghor → Farah"),
    ("Balkh-Faryab", "Balkh → Jowzjan → Faryab"),
    ("Balkh-Ghazni", "Balkh → Samangan → Bamyan → Maidan Wardak → Ghazni"),
    ("Balkh-Ghor", "Balkh → Sar-e Pol → Ghor"),
    ("Balkh-Helmand", "Balkh → Sar-e Pol → Ghor → Helmand"),
    ("Balkh-Herat", "Balkh → Sar-e Pol → Ghor → Herat"),
    ("Balkh-Jowzjan", "Balkh → Jowzjan"),
    ("Balkh-Kabul", "Balkh → Samangan → Baghlan → Parwan → Kabul"),
    ("Balkh-Kandahar", "Balkh → Sar-e Pol → Ghor → Uruzgan → Kandahar"),
    ("Balkh-Kapisa", "Balkh → Samangan → Baghlan → Parwan → Kapisa"),
    ("Balkh-Khost", "Balkh → Samangan → Bamyan → Maidan Wardak → Ghazni → Paktika → Khost"),
    ("Balkh-Kunar", "Balkh → Samangan → Baghlan → Parwan → Kabul → Laghman → Kunar"),
    ("Balkh-Kunduz", "Balkh → Kunduz"),
    ("Balkh-Laghman", "Balkh → Samangan → Baghlan → Parwan → Kabul → Laghman"),
    ("Balkh-Logar", "Balkh → Samangan → Bamyan → Maidan Wardak → Logar"),
    ("Balkh-Maidan Wardak", "Balkh → Samangan → Bamyan → Maidan Wardak"),
    ("Balkh-Nangarhar", "Balkh → Samangan → Baghlan → Parwan → Kabul → Nangarhar"),
    ("Balkh-Nimruz", "Balkh → Sar-e Pol → Ghor → Helmand → Nimruz"),
    ("Balkh-Nuristan", "Balkh → Samangan → Baghlan → Parwan → Kabul → Laghman → Kunar → Nuristan"),
    ("Balkh-Paktia", "Balkh → Samangan → Bamyan → Maidan Wardak → Ghazni → Paktia"),
    ("Balkh-Paktika", "Balkh → Samangan → Bamyan → Maidan Wardak → Ghazni → Paktika"),
    ("Balkh-Panjshir", "Balkh → Samangan → Baghlan → Parwan → Panjshir"),
    ("Balkh-Parwan", "Balkh → Samangan → Baghlan → Parwan"),
    ("Balkh-Samangan", "Balkh → Samangan"),
    ("Balkh-Sar-e Pol", "Balkh → Sar-e Pol"),
    ("Balkh-Takhar", "Balkh → Kunduz → Takhar"),
    ("Balkh-Uruzgan", "Balkh → Sar-e Pol → Ghor → Uruzgan"),
    ("Balkh-Zabul", "Balkh → Sar-e Pol → Ghor → Uruzgan → Zabul"),
    ("Bamyan-Daykundi", "Bamyan → Daykundi"),
    ("Bamyan-Ghazni", "Bamyan → Maidan Wardak → Ghazni"),
    ("Bamyan-Ghor", "Bamyan → Ghor"),
    ("Bamyan-Herat", "Bamyan → Ghor → Herat"),
    ("Bamyan-Kabul", "Bamyan → Parwan → Kabul"),
    ("Bamyan-Kandahar", "Bamyan → Ghor → Uruzgan → Kandahar"),
    ("Bamyan-Kunduz", "Bamyan → Baghlan → Kunduz"),
    ("Bamyan-Maidan Wardak", "Bamyan → Maidan Wardak"),
    ("Bamyan-Nangarhar", "Bamyan → Parwan → Kabul → Nangarhar"),
    ("Bamyan-Parwan", "Bamyan → Parwan"),
    ("Bamyan-Samangan", "Bamyan → Samangan"),
    ("Bamyan-Sar-e Pol", "Bamyan → Sar-e Pol"),
    ("Daykundi-Ghazni", "Daykundi → Ghazni"),
    ("Daykundi-Ghor", "Daykundi → Ghor"),
    ("Daykundi-Helmand", "Daykundi → Helmand"),
    ("Daykundi-Herat", "Daykundi → Ghor → Herat"),
    ("Daykundi-Kabul", "Daykundi → Maidan Wardak → Kabul"),
    ("Daykundi-Kandahar", "Daykundi → Uruzgan → Kandahar"),
    ("Daykundi-Kunduz", "Daykundi → Bamyan → Baghlan → Kunduz"),
    ("Daykundi-Maidan Wardak", "Daykundi → Maidan Wardak"),
    ("Daykundi-Nangarhar", "Daykundi → Ghazni → Logar → Nangarhar"),
    ("Daykundi-Uruzgan", "Daykundi → Uruzgan"),
    ("Farah-Ghazni", "Farah → Helmand → Uruzgan → Ghazni"),
    ("Farah-Ghor", "Farah → Ghor"),
    ("Farah-Helmand", "Farah → Helmand"),
    ("Farah-Herat", "Farah → Herat"),
    ("Farah-Kabul", "Farah → Helmand → Daykundi → Maidan Wardak → Kabul"),
    ("Farah-Kandahar", "Farah → Helmand → Kandahar"),
    ("Farah-Kunduz", "Farah → Ghor → Bamyan → Baghlan → Kunduz"),
    ("Farah-Nangarhar", "Farah → Helmand → Uruzgan → Ghazni → Logar → Nangarhar"),
    ("Farah-Nimruz", "Farah → Nimruz"),
    ("Faryab-Ghazni", "Faryab → Ghor → Daykundi → Ghazni"),
    ("Faryab-Ghor", "Faryab → Ghor"),
    ("Faryab-Herat", "Faryab → Badghis → Herat"),
    ("Faryab-Jowzjan", "Faryab → Jowzjan"),
    ("Faryab-Kabul", "Faryab → Sar-e Pol → Bamyan → Parwan → Kabul"),
    ("Faryab-Kandahar", "Faryab → Ghor → Uruzgan → Kandahar"),
    ("Faryab-Kunduz", "Faryab → Jowzjan → Balkh → Kunduz"),
    ("Faryab-Nangarhar", "Faryab → Sar-e Pol → Bamyan → Parwan → Kabul → Nangarhar"),
    ("Faryab-Sar-e Pol", "Faryab → Sar-e Pol"),
    ("Ghazni-Ghor", "Ghazni → Uruzgan → Ghor"),
    ("Ghazni-Helmand", "Ghazni → Uruzgan → Helmand"),
    ("Ghazni-Herat", "Ghazni → Uruzgan → Ghor → Herat"),
    ("Ghazni-Jowzjan", "Ghazni → Maidan Wardak → Bamyan → Sar-e Pol → Jowzjan"),
    ("Ghazni-Kabul", "Ghazni → Maidan Wardak → Kabul"),
    ("Ghazni-Kandahar", "Ghazni → Zabul → Kandahar"),
    ("Ghazni-Kapisa", "Ghazni → Maidan Wardak → Kabul → Kapisa"),
    ("Ghazni-Khost", "Ghazni → Paktika → Khost"),
    ("Ghazni-Kunar", "Ghazni → Logar → Nangarhar → Kunar"),
    ("Ghazni-Kunduz", "Ghazni → Maidan Wardak → Bamyan → Baghlan → Kunduz"),
    ("Ghazni-Laghman", "Ghazni → Maidan Wardak → Kabul → Laghman"),
    ("Ghazni-Logar", "Ghazni → Logar"),
    ("Ghazni-Maidan Wardak", "Ghazni → Maidan Wardak"),
    ("Ghazni-Nangarhar", "Ghazni → Logar → Nangarhar"),
    ("Ghazni-Nimruz", "Ghazni → Uruzgan → Helmand → Nimruz"),
    ("Ghazni-Nuristan", "Ghazni → Logar → Nangarhar → Kunar → Nuristan"),
    ("Ghazni-Paktia", "Ghazni → Paktia"),
    ("Ghazni-Paktika", "Ghazni → Paktika"),
    ("Ghazni-Panjshir", "Ghazni → Maidan Wardak → Parwan → Panjshir"),
    ("Ghazni-Parwan", "Ghazni → Maidan Wardak → Parwan"),
    ("Ghazni-Samangan", "Ghazni → Maidan Wardak → Bamyan → Samangan"),
    ("Ghazni-Sar-e Pol", "Ghazni → Maidan Wardak → Bamyan → Sar-e Pol"),
    ("Ghazni-Takhar", "Ghazni → Maidan Wardak → Bamyan → Baghlan → Kunduz → Takhar"),
    ("Ghazni-Uruzgan", "Ghazni → Uruzgan"),
    ("Ghazni-Zabul", "Ghazni → Zabul"),
    ("Ghor-Helmand", "Ghor → Helmand"),
    ("Ghor-Herat", "Ghor → Herat"),
    ("Ghor-Kabul", "Ghor → Bamyan → Parwan → Kabul"),
    ("Ghor-Kandahar", "Ghor → Uruzgan → Kandahar"),
    ("Ghor-Kunduz", "Ghor → Bamyan → Baghlan → Kunduz"),
    ("Ghor-Nangarhar", "Ghor → Bamyan → Parwan → Kabul → Nangarhar"),
    ("Ghor-Sar-e Pol", "Ghor → Sar-e Pol"),
    ("Ghor-Uruzgan", "Ghor → Uruzgan"),
    ("Helmand-Herat", "Helmand → Farah → Herat"),
    ("Helmand-Kabul", "Helmand → Daykundi → Maidan Wardak → Kabul"),
    ("Helmand-Kandahar", "Helmand → Kandahar"),
    ("Helmand-Kunduz", "Helmand → Daykundi → Bamyan → Baghlan → Kunduz"),
    ("Helmand-Nangarhar", "Helmand → Uruzgan → Ghazni → Logar → Nangarhar"),
    ("Helmand-Nimruz", "Helmand → Nimruz"),
    ("Helmand-Uruzgan", "Helmand → Uruzgan"),
    ("Herat-Jowzjan", "Herat → Badghis → Faryab → Jowzjan"),
    ("Herat-Kabul", "Herat → Ghor → Bamyan → Parwan → Kabul"),
    ("Herat-Kandahar", "Herat → Farah → Helmand → Kandahar"),
    ("Herat-Kapisa", "Herat → Ghor → Bamyan → Parwan → Kapisa"),
    ("Herat-Khost", "Herat → Ghor → Daykundi → Ghazni → Paktika → Khost"),
    ("Herat-Kunar", "Herat → Ghor → Bamyan → Parwan → Kabul → Laghman → Kunar"),
    ("Herat-Kunduz", "Herat → Ghor → Bamyan → Baghlan → Kunduz"),
    ("Herat-Laghman", "Herat → Ghor → Bamyan → Parwan → Kabul → Laghman"),
    ("Herat-Logar", "Herat → Ghor → Bamyan → Maidan Wardak → Logar"),
    ("Herat-Maidan Wardak", "Herat → Ghor → Bamyan → Maidan Wardak"),
    ("Herat-Nangarhar", "Herat → Ghor → Bamyan → Parwan → Kabul → Nangarhar"),
    ("Herat-Nimruz", "Herat → Farah → Nimruz"),
    ("Herat-Nuristan", "Herat → Ghor → Bamyan → Parwan → Kabul → Laghman → Kunar → Nuristan"),
    ("Herat-Paktia", "Herat → Ghor → Daykundi → Ghazni → Paktia"),
    ("Herat-Paktika", "Herat → Ghor → Daykundi → Ghazni → Paktika"),
    ("Herat-Panjshir", "Herat → Ghor → Bamyan → Parwan → Panjshir"),
    ("Herat-Parwan", "Herat → Ghor → Bamyan → Parwan"),
    ("Herat-Samangan", "Herat → Ghor → Bamyan → Samangan"),
    ("Herat-Sar-e Pol", "Herat → Ghor → Sar-e Pol"),
    ("Herat-Takhar", "Herat → Ghor → Bamyan → Baghlan → Kunduz → Takhar"),
    ("Herat-Uruzgan", "Herat → Ghor → Uruzgan"),
    ("Herat-Zabul", "Herat → Ghor → Uruzgan → Zabul"),
    ("Jowzjan-Kabul", "Jowzjan → Sar-e Pol → Bamyan → Parwan → Kabul"),
    ("Jowzjan-Kandahar", "Jowzjan → Faryab → Ghor → Uruzgan → Kandahar"),
    ("Jowzjan-Kunduz", "Jowzjan → Balkh → Kunduz"),
    ("Jowzjan-Nangarhar", "Jowzjan → Sar-e Pol → Bamyan → Parwan → Kabul → Nangarhar"),
    ("Jowzjan-Sar-e Pol", "Jowzjan → Sar-e Pol"),
    ("Kabul-Kandahar", "Kabul → Maidan Wardak → Ghazni → Zabul → Kandahar"),
    ("Kabul-Kapisa", "Kabul → Kapisa"),
    ("Kabul-Khost", "Kabul → Logar → Paktia → Khost"),
    ("Kabul-Kunar", "Kabul → Laghman → Kunar"),
    ("Kabul-Kunduz", "Kabul → Parwan → Baghlan → Kunduz"),
    ("Kabul-Laghman", "Kabul → Laghman"),
    ("Kabul-Logar", "Kabul → Logar"),
    ("Kabul-Maidan Wardak", "Kabul → Maidan Wardak"),
    ("Kabul-Nangarhar", "Kabul → Nangarhar"),
    ("Kabul-Nimruz", "Kabul → Maidan Wardak → Daykundi → Helmand → Nimruz"),
    ("Kabul-Nuristan", "Kabul → Laghman → Kunar → Nuristan"),
    ("Kabul-Paktia", "Kabul → Logar → Paktia"),
    ("Kabul-Paktika", "Kabul → Maidan Wardak → Ghazni → Paktika"),
    ("Kabul-Panjshir", "Kabul → Parwan → Panjshir"),
    ("Kabul-Parwan", "Kabul → Parwan"),
    ("Kabul-Samangan", "Kabul → Parwan → Baghlan → Samangan"),
    ("Kabul-Sar-e Pol", "Kabul → Parwan → Bamyan → Sar-e Pol"),
    ("Kabul-Takhar", "Kabul → Parwan → Baghlan → Kunduz → Takhar"),
    ("Kabul-Uruzgan", "Kabul → Maidan Wardak → Ghazni → Uruzgan"),
    ("Kabul-Zabul", "Kabul → Maidan Wardak → Ghazni → Zabul"),
    ("Kandahar-Kapisa", "Kandahar → Helmand → Daykundi → Bamyan → Parwan → Kapisa"),
    ("Kandahar-Khost", "Kandahar → Zabul → Paktika → Khost"),
    ("Kandahar-Kunar", "Kandahar → Zabul → Ghazni → Logar → Nangarhar → Kunar"),
    ("Kandahar-Kunduz", "Kandahar → Helmand → Daykundi → Bamyan → Baghlan → Kunduz"),
    ("Kandahar-Laghman", "Kandahar → Helmand → Daykundi → Maidan Wardak → Kabul → Laghman"),
    ("Kandahar-Logar", "Kandahar → Zabul → Ghazni → Logar"),
    ("Kandahar-Maidan Wardak", "Kandahar → Helmand → Daykundi → Maidan Wardak"),
    ("Kandahar-Nangarhar", "Kandahar → Zabul → Ghazni → Logar → Nangarhar"),
    ("Kandahar-Nimruz", "Kandahar → Helmand → Nimruz"),
    ("Kandahar-Nuristan", "Kandahar → Zabul → Ghazni → Logar → Nangarhar → Kunar → Nuristan"),
    ("Kandahar-Paktia", "Kandahar → Zabul → Ghazni → Paktia"),
    ("Kandahar-Paktika", "Kandahar → Zabul → Paktika"),
    ("Kandahar-Panjshir", "Kandahar → Helmand → Daykundi → Bamyan → Parwan → Panjshir"),
    ("Kandahar-Parwan", "Kandahar → Helmand → Daykundi → Bamyan → Parwan"),
    ("Kandahar-Samangan", "Kandahar → Helmand → Daykundi → Bamyan → Samangan"),
    ("Kandahar-Sar-e Pol", "Kandahar → Helmand → Ghor → Sar-e Pol"),
    ("Kandahar-Takhar", "Kandahar → Helmand → Daykundi → Bamyan → Baghlan → Kunduz → Takhar"),
    ("Kandahar-Uruzgan", "Kandahar → Uruzgan"),
    ("Kandahar-Zabul", "Kandahar → Zabul"),
    ("Kapisa-Kunduz", "Kapisa → Parwan → Baghlan → Kunduz"),
    ("Kapisa-Laghman", "Kapisa → Laghman"),
    ("Kapisa-Nangarhar", "Kapisa → Kabul → Nangarhar"),
    ("Kapisa-Panjshir", "Kapisa → Panjshir"),
    ("Kapisa-Parwan", "Kapisa → Parwan"),
    ("Khost-Kunduz", "Khost → Paktia → Logar → Kabul → Parwan → Baghlan → Kunduz"),
    ("Khost-Nangarhar", "Khost → Paktia → Nangarhar"),
    ("Khost-Paktia", "Khost → Paktia"),
    ("Khost-Paktika", "Khost → Paktika"),
    ("Kunar-Kunduz", "Kunar → Nangarhar → Kabul → Parwan → Baghlan → Kunduz"),
    ("Kunar-Laghman", "Kunar → Laghman"),
    ("Kunar-Nangarhar", "Kunar → Nangarhar"),
    ("Kunar-Nuristan", "Kunar → Nuristan"),
    ("Kunduz-Laghman", "Kunduz → Baghlan → Parwan → Kabul → Laghman"),
    ("Kunduz-Logar", "Kunduz → Baghlan → Parwan → Kabul → Logar"),
    ("Kunduz-Maidan Wardak", "Kunduz → Baghlan → Parwan → Maidan Wardak"),
    ("Kunduz-Nangarhar", "Kunduz → Baghlan → Parwan → Kabul → Nangarhar"),
    ("Kunduz-Nimruz", "Kunduz → Baghlan → Bamyan → Ghor → Helmand → Nimruz"),
    ("Kunduz-Nuristan", "Kunduz → Baghlan → Parwan → Kabul → Laghman → Kunar → Nuristan"),
    ("Kunduz-Paktia", "Kunduz → Baghlan → Parwan → Kabul → Logar → Paktia"),
    ("Kunduz-Paktika", "Kunduz → Baghlan → Parwan → Maidan Wardak → Ghazni → Paktika"),
    ("Kunduz-Panjshir", "Kunduz → Baghlan → Parwan → Panjshir"),
    ("Kunduz-Parwan", "Kunduz → Baghlan → Parwan"),
    ("Kunduz-Samangan", "Kunduz → Samangan"),
    ("Kunduz-Sar-e Pol", "Kunduz → Balkh → Sar-e Pol"),
    ("Kunduz-Takhar", "Kunduz → Takhar"),
    ("Kunduz-Uruzgan", "Kunduz → Baghlan → Bamyan → Ghor → Uruzgan"),
    ("Kunduz-Zabul", "Kunduz → Baghlan → Parwan → Maidan Wardak → Ghazni → Zabul"),
    ("Laghman-Nangarhar", "Laghman → Nangarhar"),
    ("Laghman-Nuristan", "Laghman → Kunar → Nuristan"),
    ("Laghman-Panjshir", "Laghman → Kapisa → Panjshir"),
    ("Logar-Maidan Wardak", "Logar → Maidan Wardak"),
    ("Logar-Nangarhar", "Logar → Nangarhar"),
    ("Logar-Paktia", "Logar → Paktia"),
    ("Maidan Wardak-Nangarhar", "Maidan Wardak → Kabul → Nangarhar"),
    ("Maidan Wardak-Parwan", "Maidan Wardak → Parwan"),
    ("Nangarhar-Nimruz", "Nangarhar → Kabul → Maidan Wardak → Daykundi → Helmand → Nimruz"),
    ("Nangarhar-Nuristan", "Nangarhar → Kunar → Nuristan"),
    ("Nangarhar-Paktia", "Nangarhar → Paktia"),
    ("Nangarhar-Paktika", "Nangarhar → Paktia → Paktika"),
    ("Nangarhar-Panjshir", "Nangarhar → Kabul → Parwan → Panjshir"),
    ("Nangarhar-Parwan", "Nangarhar → Kabul → Parwan"),
    ("Nangarhar-Samangan", "Nangarhar → Kabul → Parwan → Baghlan → Samangan"),
    ("Nangarhar-Sar-e Pol", "Nangarhar → Kabul → Parwan → Bamyan → Sar-e Pol"),
    ("Nangarhar-Takhar", "Nangarhar → Kabul → Parwan → Baghlan → Kunduz → Takhar"),
    ("Nangarhar-Uruzgan", "Nangarhar → Logar → Ghazni → Uruzgan"),
    ("Nangarhar-Zabul", "Nangarhar → Logar → Ghazni → Zabul"),
    ("Nimruz-Panjshir", "Nimruz →"),
    ("Nuristan-Panjshir", "Nuristan → Kunar → Laghman → Kapisa → Panjshir"),
    ("Paktia-Paktika", "Paktia → Paktika"),
    ("Paktika-Zabul", "Paktika → Zabul"),
    ("Panjshir-Parwan", "Panjshir → Parwan"),
    ("Panjshir-Takhar", "Panjshir → Parwan → Baghlan → Kunduz → Takhar"),
    ("Samangan-Sar-e Pol", "Samangan → Sar-e Pol"),
    ("Uruzgan-Zabul", "Uruzgan → Zabul"),
];

static BUILTIN: LazyLock<RouteTable> = LazyLock::new(|| {
    let table = RouteTable::from_entries(ROUTES);
    for rejected in table.rejected() {
        warn!(key = rejected.key(), error = %rejected, "ignoring route table entry");
    }
    debug!(
        routes = table.len(),
        rejected = table.rejected().len(),
        "route table loaded"
    );
    table
});

/// Validated routes keyed by the stored `(from, to)` direction.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<(Province, Province), ProvincePath>,
    rejected: Vec<RouteTableError>,
}

impl RouteTable {
    /// The compiled-in table.
    pub fn builtin() -> &'static RouteTable {
        &BUILTIN
    }

    /// Builds a table from raw `(key, path)` entries. Invalid entries are
    /// collected in [`RouteTable::rejected`]; the first entry wins when a key
    /// repeats.
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        let mut table = Self::default();
        for (key, path) in entries {
            match parse_entry(key, path) {
                Ok((pair, route)) => {
                    table.routes.entry(pair).or_insert(route);
                }
                Err(err) => table.rejected.push(err),
            }
        }
        table
    }

    /// Entries that failed validation.
    pub fn rejected(&self) -> &[RouteTableError] {
        &self.rejected
    }

    /// Number of stored (valid) routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route stored under exactly `(from, to)`, without reversal.
    pub fn stored(&self, from: Province, to: Province) -> Option<&ProvincePath> {
        self.routes.get(&(from, to))
    }

    /// All stored routes in their stored direction.
    pub fn routes(&self) -> impl Iterator<Item = &ProvincePath> {
        self.routes.values()
    }
}

impl RouteTableProvider for RouteTable {
    fn lookup(&self, from: Province, to: Province) -> Option<ProvincePath> {
        if let Some(route) = self.stored(from, to) {
            return Some(route.clone());
        }
        self.stored(to, from).map(ProvincePath::reversed)
    }
}

/// Splits `"From-To"`. Province names may themselves contain hyphens.
fn parse_key(key: &str) -> Result<(Province, Province), RouteTableError> {
    let malformed = || RouteTableError::MalformedKey {
        key: key.to_string(),
    };
    Province::ALL
        .iter()
        .find_map(|from| {
            let rest = key.strip_prefix(from.as_str())?.strip_prefix('-')?;
            let to = rest.parse::<Province>().ok()?;
            Some((*from, to))
        })
        .filter(|(from, to)| from != to)
        .ok_or_else(malformed)
}

fn parse_path(key: &str, path: &str) -> Result<Vec<Province>, RouteTableError> {
    let segments: Vec<&str> = path.split('→').map(str::trim).collect();
    let named = segments.iter().filter(|segment| !segment.is_empty()).count();
    if named < 2 {
        return Err(RouteTableError::TooShort {
            key: key.to_string(),
            path: path.to_string(),
        });
    }
    segments
        .into_iter()
        .map(|segment| {
            segment
                .parse::<Province>()
                .map_err(|_| RouteTableError::UnknownProvince {
                    key: key.to_string(),
                    segment: segment.to_string(),
                })
        })
        .collect()
}

fn parse_entry(
    key: &str,
    path: &str,
) -> Result<((Province, Province), ProvincePath), RouteTableError> {
    let (from, to) = parse_key(key)?;
    let route = ProvincePath::new(parse_path(key, path)?);

    let (start, end) = match (route.origin(), route.destination()) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(RouteTableError::TooShort {
                key: key.to_string(),
                path: path.to_string(),
            });
        }
    };
    if start != from || end != to {
        return Err(RouteTableError::EndpointMismatch {
            key: key.to_string(),
            start,
            end,
        });
    }

    let mut seen = Vec::with_capacity(route.len());
    for province in route.provinces() {
        if seen.contains(province) {
            return Err(RouteTableError::RepeatedProvince {
                key: key.to_string(),
                province: *province,
            });
        }
        seen.push(*province);
    }

    Ok(((from, to), route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::province::Province::*;

    #[test]
    fn test_forward_lookup() {
        let table = RouteTable::builtin();
        let route = table.lookup(Kabul, Parwan).expect("stored route");
        assert_eq!(route.provinces(), &[Kabul, Parwan]);
    }

    #[test]
    fn test_reverse_lookup() {
        let table = RouteTable::builtin();
        assert!(table.stored(Kabul, Badakhshan).is_none());
        let route = table.lookup(Kabul, Badakhshan).expect("reversed route");
        assert_eq!(
            route.provinces(),
            &[Kabul, Parwan, Baghlan, Kunduz, Takhar, Badakhshan]
        );
        assert_eq!(route.hops(), 5);
    }

    #[test]
    fn test_placeholder_entries_are_rejected() {
        let table = RouteTable::builtin();
        assert!(table.lookup(Badghis, Baghlan).is_none());
        assert!(table.lookup(Baghlan, Badghis).is_none());
        assert!(table.lookup(Nimruz, Panjshir).is_none());
        assert_eq!(table.rejected().len(), 2);
        assert!(table
            .rejected()
            .iter()
            .all(|err| matches!(err, RouteTableError::TooShort { .. })));
    }

    #[test]
    fn test_hyphenated_province_keys() {
        let table = RouteTable::builtin();
        let route = table.lookup(SarePol, Balkh).expect("route");
        assert_eq!(route.origin(), Some(SarePol));
        assert_eq!(route.destination(), Some(Balkh));
    }

    #[test]
    fn test_builtin_routes_are_well_formed() {
        let table = RouteTable::builtin();
        assert!(table.len() > 200);
        for route in table.routes() {
            assert!(route.len() >= 2);
            assert!(route.is_simple());
        }
    }

    #[test]
    fn test_rejects_bad_entries() {
        let table = RouteTable::from_entries(&[
            ("Kabul", "Kabul → Parwan"),
            ("Kabul-Kabul", "Kabul → Kabul"),
            ("Kabul-Parwan", "Kabul → Gotham → Parwan"),
            ("Kabul-Logar", "Logar → Kabul"),
            ("Kabul-Ghazni", "Kabul → Logar → Kabul → Ghazni"),
            ("Kabul-Kapisa", "Kabul"),
        ]);
        assert!(table.is_empty());
        let errors = table.rejected();
        assert!(matches!(errors[0], RouteTableError::MalformedKey { .. }));
        assert!(matches!(errors[1], RouteTableError::MalformedKey { .. }));
        assert!(matches!(
            &errors[2],
            RouteTableError::UnknownProvince { segment, .. } if segment == "Gotham"
        ));
        assert!(matches!(errors[3], RouteTableError::EndpointMismatch { .. }));
        assert!(matches!(
            errors[4],
            RouteTableError::RepeatedProvince { province: Kabul, .. }
        ));
        assert!(matches!(errors[5], RouteTableError::TooShort { .. }));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let table = RouteTable::from_entries(&[
            ("Kabul-Ghazni", "Kabul → Logar → Ghazni"),
            ("Kabul-Ghazni", "Kabul → Maidan Wardak → Ghazni"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.lookup(Kabul, Ghazni).unwrap().provinces(),
            &[Kabul, Logar, Ghazni]
        );
    }

    #[test]
    fn test_missing_pair() {
        let table = RouteTable::from_entries(&[("Kabul-Parwan", "Kabul → Parwan")]);
        assert!(table.lookup(Kabul, Logar).is_none());
        assert_eq!(table.lookup(Parwan, Kabul).unwrap().provinces(), &[Parwan, Kabul]);
    }
}
