//! Built-in capital coordinates
//!
//! Keys are the curated country spellings used by the people-group
//! exports; lookups against this table are exact.

/// (country, capital, latitude, longitude)
pub(crate) const BUILTIN_CAPITALS: &[(&str, &str, f64, f64)] = &[
    ("Afghanistan", "Kabul", 34.5553, 69.2075),
    ("Albania", "Tirana", 41.3275, 19.8187),
    ("Algeria", "Algiers", 36.7538, 3.0588),
    ("Andorra", "Andorra la Vella", 42.5063, 1.5218),
    ("Angola", "Luanda", -8.8390, 13.2894),
    ("Antigua and Barbuda", "St. John's", 17.1274, -61.8468),
    ("Argentina", "Buenos Aires", -34.6037, -58.3816),
    ("Armenia", "Yerevan", 40.1792, 44.4991),
    ("Australia", "Canberra", -35.2809, 149.1300),
    ("Austria", "Vienna", 48.2082, 16.3738),
    ("Azerbaijan", "Baku", 40.4093, 49.8671),
    ("Bahamas", "Nassau", 25.0443, -77.3504),
    ("Bahrain", "Manama", 26.2285, 50.5860),
    ("Bangladesh", "Dhaka", 23.8103, 90.4125),
    ("Barbados", "Bridgetown", 13.1132, -59.5988),
    ("Belarus", "Minsk", 53.9006, 27.5590),
    ("Belgium", "Brussels", 50.8503, 4.3517),
    ("Belize", "Belmopan", 17.2510, -88.7590),
    ("Benin", "Porto-Novo", 6.4969, 2.6289),
    ("Bhutan", "Thimphu", 27.4728, 89.6390),
    ("Bolivia", "La Paz", -16.4897, -68.1193),
    ("Bosnia and Herzegovina", "Sarajevo", 43.8563, 18.4131),
    ("Botswana", "Gaborone", -24.6282, 25.9231),
    ("Brazil", "Brasilia", -15.7939, -47.8828),
    ("Brunei", "Bandar Seri Begawan", 4.9031, 114.9398),
    ("Bulgaria", "Sofia", 42.6977, 23.3219),
    ("Burkina Faso", "Ouagadougou", 12.3714, -1.5197),
    ("Burundi", "Gitega", -3.4271, 29.9246),
    ("Cambodia", "Phnom Penh", 11.5564, 104.9282),
    ("Cameroon", "Yaounde", 3.8480, 11.5021),
    ("Canada", "Ottawa", 45.4215, -75.6972),
    ("Cape Verde", "Praia", 14.9330, -23.5133),
    ("Central African Republic", "Bangui", 4.3947, 18.5582),
    ("Chad", "N'Djamena", 12.1348, 15.0557),
    ("Chile", "Santiago", -33.4489, -70.6693),
    ("China", "Beijing", 39.9042, 116.4074),
    ("Colombia", "Bogota", 4.7110, -74.0721),
    ("Comoros", "Moroni", -11.7172, 43.2473),
    ("Congo, Democratic Republic of", "Kinshasa", -4.4419, 15.2663),
    ("Congo, Republic of the", "Brazzaville", -4.2634, 15.2429),
    ("Costa Rica", "San Jose", 9.9281, -84.0907),
    ("Cote d'Ivoire", "Yamoussoukro", 6.8276, -5.2893),
    ("Croatia", "Zagreb", 45.8150, 15.9819),
    ("Cuba", "Havana", 23.1136, -82.3666),
    ("Cyprus", "Nicosia", 35.1856, 33.3823),
    ("Czechia", "Prague", 50.0755, 14.4378),
    ("Denmark", "Copenhagen", 55.6761, 12.5683),
    ("Djibouti", "Djibouti", 11.5721, 43.1456),
    ("Dominica", "Roseau", 15.3010, -61.3870),
    ("Dominican Republic", "Santo Domingo", 18.4861, -69.9312),
    ("Ecuador", "Quito", -0.1807, -78.4678),
    ("Egypt", "Cairo", 30.0444, 31.2357),
    ("El Salvador", "San Salvador", 13.6929, -89.2182),
    ("Equatorial Guinea", "Malabo", 3.7504, 8.7371),
    ("Eritrea", "Asmara", 15.3229, 38.9251),
    ("Estonia", "Tallinn", 59.4370, 24.7536),
    ("Eswatini", "Mbabane", -26.3054, 31.1367),
    ("Ethiopia", "Addis Ababa", 9.0320, 38.7469),
    ("Fiji", "Suva", -18.1416, 178.4419),
    ("Finland", "Helsinki", 60.1699, 24.9384),
    ("France", "Paris", 48.8566, 2.3522),
    ("Gabon", "Libreville", 0.4162, 9.4673),
    ("Gambia", "Banjul", 13.4549, -16.5790),
    ("Georgia", "Tbilisi", 41.7151, 44.8271),
    ("Germany", "Berlin", 52.5200, 13.4050),
    ("Ghana", "Accra", 5.6037, -0.1870),
    ("Greece", "Athens", 37.9838, 23.7275),
    ("Grenada", "St. George's", 12.0561, -61.7488),
    ("Guatemala", "Guatemala City", 14.6349, -90.5069),
    ("Guinea", "Conakry", 9.6412, -13.5784),
    ("Guinea-Bissau", "Bissau", 11.8636, -15.5977),
    ("Guyana", "Georgetown", 6.8013, -58.1551),
    ("Haiti", "Port-au-Prince", 18.5944, -72.3074),
    ("Honduras", "Tegucigalpa", 14.0723, -87.1921),
    ("Hungary", "Budapest", 47.4979, 19.0402),
    ("Iceland", "Reykjavik", 64.1466, -21.9426),
    ("India", "New Delhi", 28.6139, 77.2090),
    ("Indonesia", "Jakarta", -6.2088, 106.8456),
    ("Iran", "Tehran", 35.6892, 51.3890),
    ("Iraq", "Baghdad", 33.3152, 44.3661),
    ("Ireland", "Dublin", 53.3498, -6.2603),
    ("Israel", "Jerusalem", 31.7683, 35.2137),
    ("Italy", "Rome", 41.9028, 12.4964),
    ("Jamaica", "Kingston", 18.0179, -76.8099),
    ("Japan", "Tokyo", 35.6762, 139.6503),
    ("Jordan", "Amman", 31.9454, 35.9284),
    ("Kazakhstan", "Astana", 51.1694, 71.4491),
    ("Kenya", "Nairobi", -1.2921, 36.8219),
    ("Kiribati", "South Tarawa", 1.3290, 172.9790),
    ("Korea, North", "Pyongyang", 39.0392, 125.7625),
    ("Korea, South", "Seoul", 37.5665, 126.9780),
    ("Kosovo", "Pristina", 42.6629, 21.1655),
    ("Kuwait", "Kuwait City", 29.3759, 47.9774),
    ("Kyrgyzstan", "Bishkek", 42.8746, 74.5698),
    ("Laos", "Vientiane", 17.9757, 102.6331),
    ("Latvia", "Riga", 56.9496, 24.1052),
    ("Lebanon", "Beirut", 33.8938, 35.5018),
    ("Lesotho", "Maseru", -29.3151, 27.4869),
    ("Liberia", "Monrovia", 6.3156, -10.8074),
    ("Libya", "Tripoli", 32.8872, 13.1913),
    ("Liechtenstein", "Vaduz", 47.1410, 9.5209),
    ("Lithuania", "Vilnius", 54.6872, 25.2797),
    ("Luxembourg", "Luxembourg", 49.6116, 6.1319),
    ("Madagascar", "Antananarivo", -18.8792, 47.5079),
    ("Malawi", "Lilongwe", -13.9626, 33.7741),
    ("Malaysia", "Kuala Lumpur", 3.1390, 101.6869),
    ("Maldives", "Male", 4.1755, 73.5093),
    ("Mali", "Bamako", 12.6392, -8.0029),
    ("Malta", "Valletta", 35.8989, 14.5146),
    ("Marshall Islands", "Majuro", 7.0897, 171.3803),
    ("Mauritania", "Nouakchott", 18.0735, -15.9582),
    ("Mauritius", "Port Louis", -20.1609, 57.5012),
    ("Mexico", "Mexico City", 19.4326, -99.1332),
    ("Micronesia", "Palikir", 6.9248, 158.1610),
    ("Moldova", "Chisinau", 47.0105, 28.8638),
    ("Monaco", "Monaco", 43.7384, 7.4246),
    ("Mongolia", "Ulaanbaatar", 47.8864, 106.9057),
    ("Montenegro", "Podgorica", 42.4304, 19.2594),
    ("Morocco", "Rabat", 34.0209, -6.8416),
    ("Mozambique", "Maputo", -25.9692, 32.5732),
    ("Myanmar", "Naypyidaw", 19.7633, 96.0785),
    ("Namibia", "Windhoek", -22.5609, 17.0658),
    ("Nauru", "Yaren", -0.5477, 166.9209),
    ("Nepal", "Kathmandu", 27.7172, 85.3240),
    ("Netherlands", "Amsterdam", 52.3676, 4.9041),
    ("New Zealand", "Wellington", -41.2865, 174.7762),
    ("Nicaragua", "Managua", 12.1150, -86.2362),
    ("Niger", "Niamey", 13.5116, 2.1254),
    ("Nigeria", "Abuja", 9.0765, 7.3986),
    ("North Macedonia", "Skopje", 41.9973, 21.4280),
    ("Norway", "Oslo", 59.9139, 10.7522),
    ("Oman", "Muscat", 23.5880, 58.3829),
    ("Pakistan", "Islamabad", 33.6844, 73.0479),
    ("Palau", "Ngerulmud", 7.5004, 134.6243),
    ("Palestine", "Ramallah", 31.9038, 35.2034),
    ("Panama", "Panama City", 8.9824, -79.5199),
    ("Papua New Guinea", "Port Moresby", -9.4438, 147.1803),
    ("Paraguay", "Asuncion", -25.2637, -57.5759),
    ("Peru", "Lima", -12.0464, -77.0428),
    ("Philippines", "Manila", 14.5995, 120.9842),
    ("Poland", "Warsaw", 52.2297, 21.0122),
    ("Portugal", "Lisbon", 38.7223, -9.1393),
    ("Qatar", "Doha", 25.2854, 51.5310),
    ("Romania", "Bucharest", 44.4268, 26.1025),
    ("Russia", "Moscow", 55.7558, 37.6173),
    ("Rwanda", "Kigali", -1.9441, 30.0619),
    ("Saint Kitts and Nevis", "Basseterre", 17.3026, -62.7177),
    ("Saint Lucia", "Castries", 14.0101, -60.9875),
    ("Saint Vincent and the Grenadines", "Kingstown", 13.1600, -61.2248),
    ("Samoa", "Apia", -13.8507, -171.7514),
    ("San Marino", "San Marino", 43.9424, 12.4578),
    ("Sao Tome and Principe", "Sao Tome", 0.3365, 6.7273),
    ("Saudi Arabia", "Riyadh", 24.7136, 46.6753),
    ("Senegal", "Dakar", 14.7167, -17.4677),
    ("Serbia", "Belgrade", 44.7866, 20.4489),
    ("Seychelles", "Victoria", -4.6191, 55.4513),
    ("Sierra Leone", "Freetown", 8.4657, -13.2317),
    ("Singapore", "Singapore", 1.3521, 103.8198),
    ("Slovakia", "Bratislava", 48.1486, 17.1077),
    ("Slovenia", "Ljubljana", 46.0569, 14.5058),
    ("Solomon Islands", "Honiara", -9.4456, 159.9729),
    ("Somalia", "Mogadishu", 2.0469, 45.3182),
    ("South Africa", "Pretoria", -25.7479, 28.2293),
    ("South Sudan", "Juba", 4.8594, 31.5713),
    ("Spain", "Madrid", 40.4168, -3.7038),
    ("Sri Lanka", "Sri Jayawardenepura Kotte", 6.8868, 79.9187),
    ("Sudan", "Khartoum", 15.5007, 32.5599),
    ("Suriname", "Paramaribo", 5.8520, -55.2038),
    ("Sweden", "Stockholm", 59.3293, 18.0686),
    ("Switzerland", "Bern", 46.9480, 7.4474),
    ("Syria", "Damascus", 33.5138, 36.2765),
    ("Taiwan", "Taipei", 25.0330, 121.5654),
    ("Tajikistan", "Dushanbe", 38.5598, 68.7870),
    ("Tanzania", "Dodoma", -6.1630, 35.7516),
    ("Thailand", "Bangkok", 13.7563, 100.5018),
    ("Timor-Leste", "Dili", -8.5569, 125.5603),
    ("Togo", "Lome", 6.1725, 1.2314),
    ("Tonga", "Nuku'alofa", -21.1394, -175.2049),
    ("Trinidad and Tobago", "Port of Spain", 10.6549, -61.5019),
    ("Tunisia", "Tunis", 36.8065, 10.1815),
    ("Turkey", "Ankara", 39.9334, 32.8597),
    ("Turkmenistan", "Ashgabat", 37.9601, 58.3261),
    ("Tuvalu", "Funafuti", -8.5211, 179.1983),
    ("Uganda", "Kampala", 0.3476, 32.5825),
    ("Ukraine", "Kyiv", 50.4501, 30.5234),
    ("United Arab Emirates", "Abu Dhabi", 24.4539, 54.3773),
    ("United Kingdom", "London", 51.5074, -0.1278),
    ("United States", "Washington", 38.9072, -77.0369),
    ("Uruguay", "Montevideo", -34.9011, -56.1645),
    ("Uzbekistan", "Tashkent", 41.2995, 69.2401),
    ("Vanuatu", "Port Vila", -17.7334, 168.3273),
    ("Vatican City", "Vatican City", 41.9029, 12.4534),
    ("Venezuela", "Caracas", 10.4806, -66.9036),
    ("Vietnam", "Hanoi", 21.0278, 105.8342),
    ("Western Sahara", "Laayoune", 27.1253, -13.1625),
    ("Yemen", "Sanaa", 15.3694, 44.1910),
    ("Zambia", "Lusaka", -15.3875, 28.3228),
    ("Zimbabwe", "Harare", -17.8252, 31.0335),
];

/// Alternate spellings seen in older exports, mapped onto a curated key.
pub(crate) const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("Myanmar (Burma)", "Myanmar"),
    ("Burma", "Myanmar"),
    ("Czech Republic", "Czechia"),
    ("Ivory Coast", "Cote d'Ivoire"),
    ("North Korea", "Korea, North"),
    ("South Korea", "Korea, South"),
    ("Democratic Republic of the Congo", "Congo, Democratic Republic of"),
    ("Republic of the Congo", "Congo, Republic of the"),
    ("East Timor", "Timor-Leste"),
    ("Swaziland", "Eswatini"),
    ("Macedonia", "North Macedonia"),
    ("Turkiye", "Turkey"),
    ("Cabo Verde", "Cape Verde"),
    ("The Gambia", "Gambia"),
];
