use tacl_inter::{agency::InterAgency, shared::clean, tools::AgencyTools};

#[test]
fn points_test() {
    assert_eq!(clean::clean_points("St.Jérôme"), "St. Jérôme");
    assert_eq!(clean::clean_points("A.B.C"), "A. B. C");
    assert_eq!(clean::clean_points("boul. Labelle"), "boul. Labelle");
    assert_eq!(clean::clean_points("1.5 km"), "1.5 km");
    assert_eq!(clean::clean_points("Fin."), "Fin.");
}

#[test]
fn bounds_test() {
    assert_eq!(clean::clean_bounds_fr("Gare (Nord)"), "Gare");
    assert_eq!(clean::clean_bounds_fr("Gare [sud]"), "Gare");
    assert_eq!(clean::clean_bounds_fr("Gare (E) Terminus"), "Gare Terminus");
    assert_eq!(clean::clean_bounds_fr("Direction Mont-Laurier"), "Mont-Laurier");
    assert_eq!(clean::clean_bounds_fr("vers Saint-Jérôme"), "Saint-Jérôme");
    assert_eq!(clean::clean_bounds_fr("Gare (Centre)"), "Gare (Centre)");
    assert_eq!(clean::clean_bounds_fr("Gare(Nord)Terminus"), "Gare Terminus");
    assert_eq!(clean::clean_bounds_fr("Gare (E)Terminus"), "Gare Terminus");
    assert_eq!(clean::clean_bounds_fr("A.(N)B"), "A. B");
    assert_eq!(clean::clean_bounds_fr("Gare (N(S))"), "Gare");
}

#[test]
fn street_types_test() {
    assert_eq!(
        clean::clean_street_types_fr_ca("boul. Curé-Labelle"),
        "Boulevard Curé-Labelle"
    );
    assert_eq!(clean::clean_street_types_fr_ca("bd Labelle"), "Boulevard Labelle");
    assert_eq!(clean::clean_street_types_fr_ca("1re av."), "1re Avenue");
    assert_eq!(clean::clean_street_types_fr_ca("ch. du Lac"), "Chemin du Lac");
    assert_eq!(clean::clean_street_types_fr_ca("Rte 117"), "Route 117");
    assert_eq!(clean::clean_street_types_fr_ca("Mtée Ryan"), "Montée Ryan");
    assert_eq!(clean::clean_street_types_fr_ca("Boulevard Labelle"), "Boulevard Labelle");
}

#[test]
fn label_test() {
    assert_eq!(clean::clean_label_fr("  gare   de Mont-Laurier "), "Gare de Mont-Laurier");
    assert_eq!(clean::clean_label_fr("GARE DE LA VILLE"), "Gare de la Ville");
    assert_eq!(
        clean::clean_label_fr("SAINT-JEAN-DE-MATHA"),
        "Saint-Jean-de-Matha"
    );
    assert_eq!(clean::clean_label_fr("Cégep D'Youville"), "Cégep d'Youville");
    assert_eq!(clean::clean_label_fr("l'église"), "L'église");
    assert_eq!(clean::clean_label_fr(""), "");
    assert_eq!(clean::clean_label_fr("A.B"), "A. B");
    assert_eq!(
        clean::clean_label_fr("Boulevard CURÉ-LABELLE"),
        "Boulevard Curé-Labelle"
    );
    assert_eq!(clean::clean_label_fr("Boulevard Labelle"), "Boulevard Labelle");
}

#[test]
fn headsign_test() {
    let agency = InterAgency::default();
    assert_eq!(agency.clean_trip_headsign("Centre-ville (Sud)"), "Centre-ville");
    assert_eq!(
        agency.clean_trip_headsign("TERMINUS ST.JÉRÔME (NORD)"),
        "Terminus St. Jérôme"
    );
    assert_eq!(
        agency.clean_trip_headsign("Direction boul.Labelle"),
        "Boulevard Labelle"
    );
    assert_eq!(agency.clean_trip_headsign("A.(N)B"), "A. B");
}

#[test]
fn headsign_idempotent_test() {
    let agency = InterAgency::default();
    for headsign in [
        "Centre-ville (Sud)",
        "Gare (Nord)",
        "TERMINUS ST.JÉRÔME (NORD)",
        "vers ch. de la Rivière",
        "CÉGEP D'YOUVILLE [E]",
        "  Mont-Laurier  via   Ferme-Neuve ",
        "A.B.C",
        "A.B",
        "A.(N)B",
        "Gare(Nord)Terminus",
        "BOUL. CURÉ-LABELLE",
    ] {
        let once = agency.clean_trip_headsign(headsign);
        let twice = agency.clean_trip_headsign(&once);
        assert_eq!(once, twice, "cleaning '{headsign}' is not stable");
    }
}
